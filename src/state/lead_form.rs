use serde::Serialize;

/// Which panel of the registration form is showing. `Submitted` is terminal;
/// there is no step three and no way back.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FormStep {
    BasicInfo,
    JobInfo,
    Submitted,
}

/// What a submit attempt did.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SubmitOutcome {
    /// Step one accepted; the job panel is now showing.
    Advanced,
    /// Terminal submit; the lead record is handed off exactly once.
    Completed,
    /// Required data missing, or the form already submitted. Nothing changed.
    Rejected,
}

/// Everything collected across both form steps, as entered.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct LeadFields {
    pub name: String,
    pub age: String,
    pub email: String,
    pub phone: String,
    pub current_job: String,
    pub current_salary: String,
    pub desired_job: String,
}

impl LeadFields {
    pub fn basic_info_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && is_numeric(&self.age)
            && is_email_shaped(&self.email)
            && !self.phone.trim().is_empty()
    }

    pub fn job_info_complete(&self) -> bool {
        !self.current_job.trim().is_empty()
            && is_numeric(&self.current_salary)
            && !self.desired_job.trim().is_empty()
    }
}

impl FormStep {
    /// Position shown by the progress indicator. A submitted form still reads
    /// as step two; the indicator reflects the step, not a separate counter.
    pub fn number(self) -> u8 {
        match self {
            FormStep::BasicInfo => 1,
            FormStep::JobInfo | FormStep::Submitted => 2,
        }
    }

    /// Attempts a submit against the current step. The step only moves
    /// forward, one panel per valid submit; an incomplete submit moves
    /// nothing.
    pub fn submit(self, fields: &LeadFields) -> (FormStep, SubmitOutcome) {
        match self {
            FormStep::BasicInfo if fields.basic_info_complete() => {
                (FormStep::JobInfo, SubmitOutcome::Advanced)
            }
            FormStep::JobInfo if fields.job_info_complete() => {
                (FormStep::Submitted, SubmitOutcome::Completed)
            }
            step => (step, SubmitOutcome::Rejected),
        }
    }
}

fn is_numeric(value: &str) -> bool {
    let value = value.trim();
    !value.is_empty() && value.chars().all(|c| c.is_ascii_digit())
}

// Loose shape check backing the browser's native email validation: something
// on both sides of a single '@', with a dotted domain.
fn is_email_shaped(value: &str) -> bool {
    let value = value.trim();
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_fields() -> LeadFields {
        LeadFields {
            name: "Taro Yamada".into(),
            age: "28".into(),
            email: "taro@example.com".into(),
            phone: "090-1234-5678".into(),
            current_job: "Sales".into(),
            current_salary: "350".into(),
            desired_job: "IT Engineer".into(),
        }
    }

    #[test]
    fn complete_basic_info_advances_once() {
        let fields = complete_fields();
        let (step, outcome) = FormStep::BasicInfo.submit(&fields);
        assert_eq!(step, FormStep::JobInfo);
        assert_eq!(outcome, SubmitOutcome::Advanced);
    }

    #[test]
    fn missing_age_keeps_step_one() {
        let mut fields = complete_fields();
        fields.age.clear();
        let (step, outcome) = FormStep::BasicInfo.submit(&fields);
        assert_eq!(step, FormStep::BasicInfo);
        assert_eq!(outcome, SubmitOutcome::Rejected);
    }

    #[test]
    fn non_numeric_age_keeps_step_one() {
        let mut fields = complete_fields();
        fields.age = "twenty-eight".into();
        let (step, _) = FormStep::BasicInfo.submit(&fields);
        assert_eq!(step, FormStep::BasicInfo);
    }

    #[test]
    fn malformed_email_keeps_step_one() {
        for email in ["", "taro", "taro@", "@example.com", "taro@example"] {
            let mut fields = complete_fields();
            fields.email = email.into();
            let (step, outcome) = FormStep::BasicInfo.submit(&fields);
            assert_eq!(step, FormStep::BasicInfo, "email {email:?} must not pass");
            assert_eq!(outcome, SubmitOutcome::Rejected);
        }
    }

    #[test]
    fn complete_job_info_is_terminal() {
        let fields = complete_fields();
        let (step, outcome) = FormStep::JobInfo.submit(&fields);
        assert_eq!(step, FormStep::Submitted);
        assert_eq!(outcome, SubmitOutcome::Completed);
    }

    #[test]
    fn missing_job_fields_keep_step_two() {
        let wipes: [fn(&mut LeadFields); 3] = [
            |f| f.current_job.clear(),
            |f| f.current_salary.clear(),
            |f| f.desired_job.clear(),
        ];
        for wipe in wipes {
            let mut fields = complete_fields();
            wipe(&mut fields);
            let (step, outcome) = FormStep::JobInfo.submit(&fields);
            assert_eq!(step, FormStep::JobInfo);
            assert_eq!(outcome, SubmitOutcome::Rejected);
        }
    }

    #[test]
    fn submitted_form_rejects_further_submits() {
        let fields = complete_fields();
        let (step, outcome) = FormStep::Submitted.submit(&fields);
        assert_eq!(step, FormStep::Submitted);
        assert_eq!(outcome, SubmitOutcome::Rejected);
    }

    #[test]
    fn full_walk_emits_exactly_one_completion() {
        let fields = complete_fields();
        let mut completions = 0;
        let mut step = FormStep::BasicInfo;
        for _ in 0..4 {
            let (next, outcome) = step.submit(&fields);
            if outcome == SubmitOutcome::Completed {
                completions += 1;
            }
            step = next;
        }
        assert_eq!(step, FormStep::Submitted);
        assert_eq!(completions, 1);
    }

    #[test]
    fn progress_indicator_tracks_the_step() {
        assert_eq!(FormStep::BasicInfo.number(), 1);
        assert_eq!(FormStep::JobInfo.number(), 2);
        assert_eq!(FormStep::Submitted.number(), 2);
    }
}
