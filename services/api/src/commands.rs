use crate::infra::default_policy;
use chrono::{Local, NaiveDate};
use clap::Args;
use loan_decision::decision::{
    BatchRequestImporter, DecisionError, DecisionRequest, DecisionResponse, LoanDecision,
    LoanDecisionService,
};
use loan_decision::error::AppError;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct DecideArgs {
    /// Estonian personal identification code of the applicant
    #[arg(long)]
    pub(crate) personal_code: String,
    /// Requested loan amount in euros
    #[arg(long)]
    pub(crate) amount: i64,
    /// Requested loan period in months
    #[arg(long)]
    pub(crate) period: i32,
    /// Date the applicant's age is evaluated on (defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Print the decision as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct BatchArgs {
    /// CSV file with personal_code, loan_amount and loan_period columns
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Date applicants' ages are evaluated on (defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Print one JSON object per line instead of a table
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BatchLine<'a> {
    personal_code: &'a str,
    requested_amount: i64,
    requested_period: i32,
    #[serde(flatten)]
    outcome: DecisionResponse,
}

pub(crate) fn run_decide(args: DecideArgs) -> Result<(), AppError> {
    let DecideArgs {
        personal_code,
        amount,
        period,
        today,
        json,
    } = args;

    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let service = LoanDecisionService::new(default_policy());
    let request = DecisionRequest::new(personal_code, amount, period);
    let decision = service.decide_on(&request, today)?;

    if json {
        println!("{}", to_json(&DecisionResponse::from(decision))?);
    } else {
        println!("Loan decision for {} (evaluated {today})", request.personal_code);
        println!("Requested: {amount} EUR over {period} months");
        println!(
            "Approved:  {} EUR over {} months",
            decision.loan_amount, decision.loan_period
        );
    }

    Ok(())
}

pub(crate) fn run_batch(args: BatchArgs) -> Result<(), AppError> {
    let BatchArgs { input, today, json } = args;

    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let requests = BatchRequestImporter::from_path(&input)?;
    let service = LoanDecisionService::new(default_policy());

    let mut approved = 0usize;
    for request in &requests {
        let outcome = service.decide_on(request, today);
        if outcome.is_ok() {
            approved += 1;
        }

        if json {
            let line = BatchLine {
                personal_code: &request.personal_code,
                requested_amount: request.loan_amount,
                requested_period: request.loan_period,
                outcome: response_for(&outcome),
            };
            println!("{}", to_json(&line)?);
        } else {
            println!("{}", describe(request, &outcome));
        }
    }

    if !json {
        println!(
            "\n{approved}/{} requests approved (evaluated {today})",
            requests.len()
        );
    }

    Ok(())
}

fn response_for(outcome: &Result<LoanDecision, DecisionError>) -> DecisionResponse {
    match outcome {
        Ok(decision) => DecisionResponse::from(*decision),
        Err(error) => DecisionResponse::from(error),
    }
}

fn describe(request: &DecisionRequest, outcome: &Result<LoanDecision, DecisionError>) -> String {
    let result = match outcome {
        Ok(decision) => format!(
            "approved {} EUR / {} months",
            decision.loan_amount, decision.loan_period
        ),
        Err(error) => format!("rejected: {}", error.public_message()),
    };

    format!(
        "- {} | {} EUR / {} months | {result}",
        request.personal_code, request.loan_amount, request.loan_period
    )
}

fn to_json<T: Serialize>(value: &T) -> Result<String, AppError> {
    serde_json::to_string(value)
        .map_err(|err| AppError::Decision(DecisionError::Unexpected(err.to_string())))
}
