use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use salaryscope::models::EducationLevel;
use salaryscope::{
    explore, CleaningConfig, Config, ModelBundle, SalaryPredictor, SurveyDataset,
    SUPPORTED_COUNTRIES,
};

#[derive(Parser, Debug)]
#[command(name = "salaryscope")]
#[command(version = "0.1.0")]
#[command(about = "Explore developer salaries and predict them from a trained model")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Predict a salary from country, education level and experience
    Predict {
        /// Country, one of the supported survey labels
        #[arg(short, long)]
        country: String,

        /// Education level, one of the four canonical buckets
        #[arg(short, long)]
        education: String,

        /// Years of professional experience
        #[arg(short = 'x', long, default_value = "3",
              value_parser = clap::value_parser!(u32).range(0..=50))]
        experience: u32,
    },
    /// Download the survey (first run only) and summarize the cleaned data
    Explore,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("salaryscope=info".parse()?)
                .add_directive("reqwest=warn".parse()?),
        )
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    let args = Args::parse();
    let config = Config::from_env();

    match args.command {
        Command::Predict {
            country,
            education,
            experience,
        } => run_predict(&config, &country, &education, experience),
        Command::Explore => run_explore(&config).await,
    }
}

fn run_predict(
    config: &Config,
    country: &str,
    education: &str,
    experience: u32,
) -> anyhow::Result<()> {
    if !SUPPORTED_COUNTRIES.contains(&country) {
        anyhow::bail!(
            "unsupported country {:?}; choose one of:\n  {}",
            country,
            SUPPORTED_COUNTRIES.join("\n  ")
        );
    }

    let education = EducationLevel::parse(education).ok_or_else(|| {
        let options: Vec<&str> = EducationLevel::ALL.iter().map(|e| e.as_str()).collect();
        anyhow::anyhow!(
            "unknown education level {:?}; choose one of:\n  {}",
            education,
            options.join("\n  ")
        )
    })?;

    let bundle = ModelBundle::load(&config.model_path)?;
    let predictor = SalaryPredictor::new(bundle)?;

    let salary = predictor.predict(country, education, f64::from(experience))?;
    println!("The estimated salary is ${:.2}", salary);

    Ok(())
}

async fn run_explore(config: &Config) -> anyhow::Result<()> {
    let dataset = SurveyDataset::ensure(config, &CleaningConfig::default()).await?;
    tracing::info!("Cleaned dataset holds {} rows", dataset.len());

    println!("{}", format_summary(dataset.records()));
    Ok(())
}

fn format_summary(records: &[salaryscope::models::CleanedRecord]) -> String {
    let mut output = String::new();

    output.push_str("\n=== Stack Overflow Developer Survey 2024 ===\n");
    output.push_str(&format!("Cleaned responses: {}\n", records.len()));

    output.push_str("\nRespondents by country:\n");
    for (country, count) in explore::country_counts(records) {
        output.push_str(&format!("  {:<55} {:>7}\n", country, count));
    }

    output.push_str("\nMean salary by country:\n");
    for (country, mean) in explore::mean_salary_by_country(records) {
        output.push_str(&format!("  {:<55} ${:>12.2}\n", country, mean));
    }

    output.push_str("\nMean salary by years of professional experience:\n");
    for (years, mean) in explore::mean_salary_by_experience(records) {
        output.push_str(&format!("  {:>4.1} yrs  ${:>12.2}\n", years, mean));
    }

    output
}
