use crate::domain::Motion;
use crate::loader::{LoaderError, read_csv};
use std::path::Path;
use tracing::{info, instrument};

#[instrument]
pub async fn load_motions(path: &Path) -> Result<Vec<Motion>, LoaderError> {
    info!("📁 Loading motions...");
    let motions = read_csv(path, parse_motions).await?;

    info!("📁 Loading motions... OK, {} loaded", motions.len());
    Ok(motions)
}

fn parse_motions(content: &str) -> Result<Vec<Motion>, csv::Error> {
    csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(content.as_bytes())
        .deserialize::<Motion>()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::env::temp_dir;
    use test_log::test;

    const MOTIONS: &str = r#"Council File,Mover,Second,geojson,Votes
23-0001,TRACI PARK,JOHN LEE,"[{'lat': 34.05, 'lng': -118.25}]","[{""Member Name"": ""TRACI PARK"", ""Vote"": ""YES""}]"
23-0002,JOHN LEE,,,
"#;

    #[test]
    fn parses_the_known_columns() {
        let motions = parse_motions(MOTIONS).unwrap();

        assert_eq!(
            motions[0],
            Motion {
                mover: Some("TRACI PARK".to_string()),
                second: Some("JOHN LEE".to_string()),
                geojson: Some("[{'lat': 34.05, 'lng': -118.25}]".to_string()),
                votes: Some(r#"[{"Member Name": "TRACI PARK", "Vote": "YES"}]"#.to_string()),
            }
        );
    }

    #[test]
    fn empty_cells_are_absent() {
        let motions = parse_motions(MOTIONS).unwrap();

        assert_eq!(
            motions[1],
            Motion {
                mover: Some("JOHN LEE".to_string()),
                ..Motion::default()
            }
        );
    }

    #[test]
    fn missing_columns_are_absent() {
        let motions = parse_motions("Mover\nNITHYA RAMAN\n").unwrap();

        assert_eq!(motions[0].mover.as_deref(), Some("NITHYA RAMAN"));
        assert_eq!(motions[0].votes, None);
    }

    #[test(tokio::test)]
    async fn load_motions_reads_a_snapshot_file() -> Result<(), LoaderError> {
        let path = temp_dir().join("zonewatch_load_motions.csv");
        tokio::fs::write(&path, MOTIONS).await.unwrap();

        let motions = load_motions(&path).await?;

        assert_eq!(motions.len(), 2);
        Ok(())
    }
}
