use super::super::domain::LoanApplication;

pub(crate) struct AssessmentSignals {
    pub debt_to_income: f64,
    pub credit_score: i32,
    pub age: i32,
}

/// Derive the signals the decision function classifies against. Zero gross
/// income yields an infinite ratio, which the hard ceiling then rejects; the
/// derivation itself never fails on validated input.
pub(crate) fn derive_signals(application: &LoanApplication) -> AssessmentSignals {
    let annual_expenses = application.monthly_expenses as f64 * 12.0;
    let debt_to_income = if application.gross_income == 0 {
        f64::INFINITY
    } else {
        annual_expenses / application.gross_income as f64
    };

    AssessmentSignals {
        debt_to_income,
        credit_score: application.credit_score,
        age: application.age,
    }
}
