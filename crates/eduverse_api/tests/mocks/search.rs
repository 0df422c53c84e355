use std::sync::{Arc, Mutex};

use eduverse_api::{SearchHit, SearchOutcome, SearchQuery, SearchUpstream};

#[derive(Clone)]
pub struct MockSearchUpstream {
    pub answer: Option<String>,
    pub results: Vec<SearchHit>,
    pub calls: Arc<Mutex<Vec<SearchQuery>>>,
    pub fail_with: Option<String>,
}

impl MockSearchUpstream {
    pub fn new(answer: Option<&str>, results: Vec<SearchHit>) -> Self {
        Self {
            answer: answer.map(|a| a.to_string()),
            results,
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            fail_with: Some(msg.to_string()),
            ..Self::new(None, Vec::new())
        }
    }
}

impl SearchUpstream for MockSearchUpstream {
    type Error = anyhow::Error;

    async fn search(&self, query: SearchQuery) -> Result<SearchOutcome, Self::Error> {
        self.calls.lock().unwrap().push(query);
        if let Some(ref msg) = self.fail_with {
            return Err(anyhow::anyhow!("{}", msg));
        }

        Ok(SearchOutcome {
            answer: self.answer.clone(),
            results: self.results.clone(),
        })
    }
}
