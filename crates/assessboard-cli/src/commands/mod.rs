pub mod dashboard;
pub mod series;
pub mod summary;

use assessboard_core::{AssessmentSummary, DEFAULT_AVERAGE_PERCENTILE, Field, validate_field};

/// Starting values shared by the commands that render a dashboard.
#[derive(clap::Args, Debug, Clone)]
pub struct ResultArgs {
    /// Rank to start with (greater than 0)
    #[arg(long, default_value = "1", value_parser = parse_rank)]
    pub rank: u32,

    /// Percentile to start with (0-99)
    #[arg(long, default_value = "30", value_parser = parse_percentile)]
    pub percentile: u32,

    /// Correct answers out of 15 to start with (0-15)
    #[arg(long, default_value = "10", value_parser = parse_score)]
    pub score: u32,

    /// Population average percentile the result is compared against
    #[arg(long, default_value_t = DEFAULT_AVERAGE_PERCENTILE,
          value_parser = clap::value_parser!(u32).range(0..=100))]
    pub average: u32,
}

impl ResultArgs {
    pub fn summary(&self) -> AssessmentSummary {
        // Each value already passed its field rule in the value parser.
        AssessmentSummary::new(self.rank, self.percentile, self.score).unwrap_or_else(|| {
            eprintln!("Error: starting values out of range");
            std::process::exit(2);
        })
    }
}

fn parse_with(field: Field, raw: &str) -> Result<u32, String> {
    validate_field(field, raw).map_err(|e| e.to_string())
}

fn parse_rank(raw: &str) -> Result<u32, String> {
    parse_with(Field::Rank, raw)
}

fn parse_percentile(raw: &str) -> Result<u32, String> {
    parse_with(Field::Percentile, raw)
}

fn parse_score(raw: &str) -> Result<u32, String> {
    parse_with(Field::Score, raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parsers_use_field_messages() {
        assert_eq!(parse_rank("3"), Ok(3));
        assert_eq!(parse_rank("0"), Err("Rank must be a positive number!".to_string()));
        assert_eq!(
            parse_percentile("100"),
            Err("Please enter a value between 0-99".to_string())
        );
        assert_eq!(parse_score(""), Err("Score is required!".to_string()));
    }
}
