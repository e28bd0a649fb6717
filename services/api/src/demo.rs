use crate::infra::{default_assessment_policy, default_capacity_policy, InMemoryFinancialStore};
use clap::Args;
use std::sync::Arc;

use loan_engine::error::AppError;
use loan_engine::lending::{
    Borrower, CapacityQuery, EmploymentStatus, LendingService, LoanApplication,
};

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Email registered for the demo borrower
    #[arg(long, default_value = "avery@example.com")]
    pub(crate) email: String,
    /// Borrower name
    #[arg(long, default_value = "Avery Quinn")]
    pub(crate) name: String,
    /// Date of birth, YYYY-MM-DD
    #[arg(long, default_value = "1990-01-01")]
    pub(crate) dob: String,
    /// Credit score on the 0..=1000 scale
    #[arg(long, default_value_t = 720)]
    pub(crate) credit_score: i32,
    /// Age used for estimation and assessment
    #[arg(long, default_value_t = 30)]
    pub(crate) age: i32,
    /// Gross annual income
    #[arg(long, default_value_t = 100_000)]
    pub(crate) gross_income: i64,
    /// Employment status: CASUAL, FULL_TIME, PART_TIME, or SELF_EMPLOYED
    #[arg(long, default_value = "FULL_TIME")]
    pub(crate) employment_status: String,
    /// Monthly expenses used for the loan assessment
    #[arg(long, default_value_t = 2_500)]
    pub(crate) monthly_expenses: i64,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let employment_status: EmploymentStatus = args.employment_status.parse().map_err(AppError::from)?;

    let store = Arc::new(InMemoryFinancialStore::default());
    let service = LendingService::new(
        store.clone(),
        default_capacity_policy(),
        default_assessment_policy(),
    );

    println!("Loan origination demo");

    let borrower = Borrower {
        name: args.name,
        dob: args.dob,
        email: args.email,
        credit_score: args.credit_score,
    };

    let first = service.register_borrower(&borrower).map_err(AppError::from)?;
    println!(
        "- Registered {} ({})",
        first.email,
        if first.created { "created" } else { "already existed" }
    );
    let second = service.register_borrower(&borrower).map_err(AppError::from)?;
    println!(
        "- Registered {} again ({})",
        second.email,
        if second.created { "created" } else { "already existed" }
    );

    let query = CapacityQuery {
        borrower_email: borrower.email.clone(),
        age: args.age,
        gross_income: args.gross_income,
        employment_status,
    };

    println!("\nBorrowing capacity ({} at age {})", employment_status, args.age);
    for _ in 0..2 {
        let calculation = service.estimate_capacity(&query).map_err(AppError::from)?;
        println!(
            "- Estimated {} (calculation {})",
            calculation.estimated_borrowing_capacity, calculation.id
        );
    }

    let history = store.history(&borrower.email);
    println!("- History now holds {} append-only records", history.len());

    println!("\nLoan assessment");
    let applications = [
        ("submitted profile", LoanApplication {
            age: args.age,
            gross_income: args.gross_income,
            employment_status,
            credit_score: args.credit_score,
            monthly_expenses: args.monthly_expenses,
        }),
        ("strained profile", LoanApplication {
            age: args.age,
            gross_income: 50_000,
            employment_status: EmploymentStatus::Casual,
            credit_score: 200,
            monthly_expenses: 4_000,
        }),
        ("strong profile", LoanApplication {
            age: 35,
            gross_income: 120_000,
            employment_status: EmploymentStatus::FullTime,
            credit_score: 950,
            monthly_expenses: 1_000,
        }),
    ];

    for (label, application) in applications {
        let status = service
            .assess_application(&application)
            .map_err(AppError::from)?;
        println!("- {label}: {}", status.label());
    }

    Ok(())
}
