use crate::models::AppData;
use crate::sentiment::SentimentAnalyzer;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub data: Arc<Mutex<AppData>>,
    pub analyzer: SentimentAnalyzer,
}

impl AppState {
    pub fn new(data_path: PathBuf, data: AppData, analyzer: SentimentAnalyzer) -> Self {
        Self {
            data_path,
            data: Arc::new(Mutex::new(data)),
            analyzer,
        }
    }
}
