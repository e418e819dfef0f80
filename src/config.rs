use std::env;
use std::path::PathBuf;

const DEFAULT_SURVEY_URL: &str =
    "https://survey.stackoverflow.co/datasets/stack-overflow-developer-survey-2024.zip";
const DEFAULT_DATA_DIR: &str = "data";
const DEFAULT_MODEL_PATH: &str = "saved_steps.json";
const SURVEY_CSV_MEMBER: &str = "survey_results_public.csv";
const ARCHIVE_FILENAME: &str = "survey.zip";

#[derive(Debug, Clone)]
pub struct Config {
    pub survey_url: String,
    pub data_dir: PathBuf,
    pub model_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        let survey_url =
            env::var("SURVEY_URL").unwrap_or_else(|_| DEFAULT_SURVEY_URL.to_string());

        let data_dir = env::var("DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_DIR));

        let model_path = env::var("MODEL_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_MODEL_PATH));

        Self {
            survey_url,
            data_dir,
            model_path,
        }
    }

    pub fn archive_path(&self) -> PathBuf {
        self.data_dir.join(ARCHIVE_FILENAME)
    }

    pub fn csv_path(&self) -> PathBuf {
        self.data_dir.join(SURVEY_CSV_MEMBER)
    }

    pub fn csv_member(&self) -> &'static str {
        SURVEY_CSV_MEMBER
    }
}
