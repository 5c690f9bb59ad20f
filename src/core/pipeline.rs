use crate::core::chart::render_chart;
use crate::core::frequency::parse_core_list;
use crate::core::numerics::compute_core_numbers;
use crate::core::projection::{segments_by_order, top_archetypes};
use crate::core::{CalendarDate, ConfigProvider, Pipeline, ProfileInput, ProfileOutput, Storage};
use crate::domain::model::{ProfileReport, Segment, SECTOR_ORDER};
use crate::utils::error::{ProfileError, Result};
use chrono::{Datelike, NaiveDate};

const DATE_FORMAT: &str = "%d/%m/%Y";

pub struct ProfilePipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> ProfilePipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for ProfilePipeline<S, C> {
    async fn extract(&self) -> Result<ProfileInput> {
        let raw_date = self.config.date_of_birth().trim();
        tracing::debug!("Parsing date of birth: {}", raw_date);

        let parsed = NaiveDate::parse_from_str(raw_date, DATE_FORMAT).map_err(|e| {
            ProfileError::InvalidDateError {
                value: raw_date.to_string(),
                reason: e.to_string(),
            }
        })?;
        let date = CalendarDate {
            day: parsed.day(),
            month: parsed.month(),
            year: parsed.year(),
        };

        // Lenient by contract: malformed tokens are dropped, never reported.
        let counts = parse_core_list(self.config.core_list());
        tracing::debug!("Core list yielded {} valid digits", counts.total());

        Ok(ProfileInput {
            name: self.config.name().map(str::to_string),
            date_text: raw_date.to_string(),
            date,
            counts,
        })
    }

    async fn transform(&self, input: ProfileInput) -> Result<ProfileOutput> {
        let core_numbers = compute_core_numbers(&input.date);
        tracing::debug!(
            "Core numbers: personality={} bridge={} life_value={}",
            core_numbers.personality,
            core_numbers.bridge,
            core_numbers.life_value
        );

        let segments: Vec<Segment> = segments_by_order(&input.counts)
            .iter()
            .map(|(sector, count)| Segment {
                sector: sector.number(),
                count: *count,
                label: sector.label().to_string(),
            })
            .collect();

        let top: Vec<u8> = top_archetypes(&input.counts)
            .iter()
            .map(|sector| sector.number())
            .collect();

        let report = ProfileReport {
            name: input.name.clone(),
            date_of_birth: input.date_text.clone(),
            core_numbers,
            segments,
            top_archetypes: top,
            total_count: input.counts.total(),
        };

        let json_output = serde_json::to_string_pretty(&report)?;
        let summary_output = build_summary(&report);
        let chart_output = render_chart(&input.counts, self.config.show_angle_note());

        Ok(ProfileOutput {
            report,
            json_output,
            summary_output,
            chart_output,
        })
    }

    async fn load(&self, output: ProfileOutput) -> Result<String> {
        tracing::debug!("Writing profile artifacts");

        self.storage
            .write_file("profile.json", output.json_output.as_bytes())
            .await?;
        self.storage
            .write_file("summary.txt", output.summary_output.as_bytes())
            .await?;
        self.storage
            .write_file("nonagon.svg", output.chart_output.as_bytes())
            .await?;

        tracing::debug!("Profile artifacts saved");
        Ok(self.config.output_path().to_string())
    }
}

fn build_summary(report: &ProfileReport) -> String {
    let mut lines = Vec::new();

    lines.push(format!(
        "Identity: {} | {}",
        report.name.as_deref().unwrap_or("-"),
        report.date_of_birth
    ));
    lines.push(format!(
        "Core Numbers: Personality = {} | Life Value = {} (bridge {} -> {})",
        report.core_numbers.personality,
        report.core_numbers.life_value,
        report.core_numbers.bridge,
        report.core_numbers.life_value
    ));

    let top = if report.top_archetypes.is_empty() {
        "-".to_string()
    } else {
        report
            .top_archetypes
            .iter()
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    };
    lines.push(format!("Top archetypes (by frequency): {}", top));
    lines.push("External struggle = 8 + 9 (on the Personality/5 side)".to_string());
    lines.push("Internal struggle = 8 + 7 (on the Values/2 side)".to_string());

    lines.push(String::new());
    let order = SECTOR_ORDER
        .iter()
        .map(|s| s.number().to_string())
        .collect::<Vec<_>>()
        .join("-");
    lines.push(format!("Sector labels (order {}):", order));
    for segment in &report.segments {
        lines.push(format!("  {}: {}", segment.sector, segment.label));
    }

    lines.push(String::new());
    lines.push("Sector frequencies:".to_string());
    for segment in &report.segments {
        lines.push(format!("  {}: {}", segment.sector, segment.count));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                files: Arc::new(Mutex::new(HashMap::new())),
            }
        }

        async fn get_file(&self, path: &str) -> Option<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned()
        }
    }

    impl Storage for MockStorage {
        async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    struct MockConfig {
        name: Option<String>,
        date_of_birth: String,
        core_list: String,
    }

    impl MockConfig {
        fn new(date_of_birth: &str, core_list: &str) -> Self {
            Self {
                name: Some("Dewi".to_string()),
                date_of_birth: date_of_birth.to_string(),
                core_list: core_list.to_string(),
            }
        }
    }

    impl ConfigProvider for MockConfig {
        fn name(&self) -> Option<&str> {
            self.name.as_deref()
        }

        fn date_of_birth(&self) -> &str {
            &self.date_of_birth
        }

        fn core_list(&self) -> &str {
            &self.core_list
        }

        fn output_path(&self) -> &str {
            "test_output"
        }

        fn show_angle_note(&self) -> bool {
            true
        }
    }

    #[tokio::test]
    async fn test_extract_parses_date_and_core_list() {
        let pipeline = ProfilePipeline::new(
            MockStorage::new(),
            MockConfig::new("17/08/1990", "1,7,1,7,7,5,5,2"),
        );

        let input = pipeline.extract().await.unwrap();

        assert_eq!(input.name.as_deref(), Some("Dewi"));
        assert_eq!(
            input.date,
            CalendarDate {
                day: 17,
                month: 8,
                year: 1990
            }
        );
        assert_eq!(input.counts.total(), 8);
    }

    #[tokio::test]
    async fn test_extract_trims_date_input() {
        let pipeline = ProfilePipeline::new(
            MockStorage::new(),
            MockConfig::new("  17/08/1990  ", ""),
        );

        let input = pipeline.extract().await.unwrap();
        assert_eq!(input.date_text, "17/08/1990");
    }

    #[tokio::test]
    async fn test_extract_rejects_malformed_date() {
        let pipeline = ProfilePipeline::new(
            MockStorage::new(),
            MockConfig::new("1990-08-17", "1,2,3"),
        );

        let err = pipeline.extract().await.unwrap_err();
        match err {
            ProfileError::InvalidDateError { value, .. } => assert_eq!(value, "1990-08-17"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_extract_accepts_empty_core_list() {
        let pipeline =
            ProfilePipeline::new(MockStorage::new(), MockConfig::new("17/08/1990", ""));

        let input = pipeline.extract().await.unwrap();
        assert!(input.counts.is_empty());
    }

    #[tokio::test]
    async fn test_transform_reference_profile() {
        let pipeline = ProfilePipeline::new(
            MockStorage::new(),
            MockConfig::new("17/08/1990", "1,7,1,7,7,5,5,2"),
        );

        let input = pipeline.extract().await.unwrap();
        let output = pipeline.transform(input).await.unwrap();

        let report = &output.report;
        assert_eq!(report.core_numbers.personality, 8);
        assert_eq!(report.core_numbers.bridge, 27);
        assert_eq!(report.core_numbers.life_value, 9);
        assert_eq!(report.top_archetypes, vec![7, 1, 5]);
        assert_eq!(report.total_count, 8);

        let order: Vec<u8> = report.segments.iter().map(|s| s.sector).collect();
        assert_eq!(order, vec![1, 3, 4, 9, 5, 8, 2, 7, 6]);

        assert!(output.summary_output.contains("Personality = 8"));
        assert!(output
            .summary_output
            .contains("Life Value = 9 (bridge 27 -> 9)"));
        assert!(output.chart_output.contains("<path"));

        // report survives a JSON round trip
        let parsed: ProfileReport = serde_json::from_str(&output.json_output).unwrap();
        assert_eq!(parsed.core_numbers, report.core_numbers);
        assert_eq!(parsed.top_archetypes, report.top_archetypes);
    }

    #[tokio::test]
    async fn test_transform_empty_core_list_renders_placeholder() {
        let pipeline =
            ProfilePipeline::new(MockStorage::new(), MockConfig::new("17/08/1990", "abc,,"));

        let input = pipeline.extract().await.unwrap();
        let output = pipeline.transform(input).await.unwrap();

        assert_eq!(output.report.total_count, 0);
        assert!(output.report.top_archetypes.is_empty());
        assert!(output.chart_output.contains("No core list yet."));
        assert!(output
            .summary_output
            .contains("Top archetypes (by frequency): -"));
    }

    #[tokio::test]
    async fn test_load_writes_all_artifacts() {
        let storage = MockStorage::new();
        let pipeline = ProfilePipeline::new(
            storage.clone(),
            MockConfig::new("17/08/1990", "1,7,1,7,7,5,5,2"),
        );

        let input = pipeline.extract().await.unwrap();
        let output = pipeline.transform(input).await.unwrap();
        let output_path = pipeline.load(output).await.unwrap();

        assert_eq!(output_path, "test_output");
        for file in ["profile.json", "summary.txt", "nonagon.svg"] {
            let data = storage.get_file(file).await;
            assert!(data.is_some(), "missing {file}");
            assert!(!data.unwrap().is_empty());
        }
    }
}
