use crate::core::{ConfigProvider, Pipeline, SortResult, Storage};
use crate::utils::error::Result;

pub struct WordSortPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> WordSortPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for WordSortPipeline<S, C> {
    /// Reads the input file and splits it into lines. Every line counts as
    /// one word, including empty lines.
    async fn extract(&self) -> Result<Vec<String>> {
        tracing::debug!("Reading input file: {}", self.config.input_path());
        let data = self.storage.read_file(self.config.input_path()).await?;
        let text = String::from_utf8(data)?;

        let lines: Vec<String> = text.lines().map(str::to_string).collect();
        tracing::debug!("Read {} lines", lines.len());

        Ok(lines)
    }

    /// Trims surrounding whitespace from each line and sorts ascending by
    /// code-point order, so uppercase letters sort before lowercase ones.
    async fn transform(&self, lines: Vec<String>) -> Result<SortResult> {
        let mut words: Vec<String> = lines.into_iter().map(|line| line.trim().to_string()).collect();
        words.sort();

        Ok(SortResult { words })
    }

    /// Writes each word followed by a single newline, overwriting any
    /// existing output file. An empty word list produces an empty file.
    async fn load(&self, result: SortResult) -> Result<String> {
        let output_path = self.config.output_path().to_string();

        let mut output = String::new();
        for word in &result.words {
            output.push_str(word);
            output.push('\n');
        }

        tracing::debug!(
            "Writing {} words ({} bytes) to {}",
            result.len(),
            output.len(),
            output_path
        );
        self.storage.write_file(&output_path, output.as_bytes()).await?;

        Ok(output_path)
    }
}
