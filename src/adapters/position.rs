use crate::domain::model::Coordinate;
use crate::domain::ports::PositionSource;
use crate::utils::error::{Result, TravelError};
use async_trait::async_trait;
use std::path::Path;
use std::time::Duration;
use tokio::fs::File;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines};

/// A device that reports a single fix and then goes quiet.
pub struct FixedPosition {
    fix: Option<Coordinate>,
}

impl FixedPosition {
    pub fn new(fix: Coordinate) -> Self {
        Self { fix: Some(fix) }
    }
}

#[async_trait]
impl PositionSource for FixedPosition {
    async fn next_fix(&mut self) -> Result<Option<Coordinate>> {
        Ok(self.fix.take())
    }
}

/// Parses a `lat,lon` pair in decimal degrees.
pub fn parse_fix(text: &str) -> Result<Coordinate> {
    let mut parts = text.split(',').map(str::trim);
    let (Some(lat), Some(lon), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(TravelError::PositionError {
            message: format!("expected 'lat,lon', got '{}'", text),
        });
    };

    let parse = |value: &str| {
        value.parse::<f64>().map_err(|e| TravelError::PositionError {
            message: format!("'{}' is not a number: {}", value, e),
        })
    };

    Coordinate::new(parse(lat)?, parse(lon)?)
}

/// Replays recorded fixes, one `lat,lon` per line. Blank lines and lines
/// starting with `#` are skipped.
pub struct ReplayPositions<R> {
    lines: Lines<R>,
    interval: Option<Duration>,
    line_no: usize,
    emitted: usize,
}

impl<R: AsyncBufRead + Unpin + Send + 'static> ReplayPositions<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            interval: None,
            line_no: 0,
            emitted: 0,
        }
    }

    /// Pause between fixes, to mimic a device's update cadence.
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = Some(interval);
        self
    }
}

impl ReplayPositions<BufReader<File>> {
    pub async fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path).await?;
        Ok(Self::new(BufReader::new(file)))
    }
}

#[async_trait]
impl<R: AsyncBufRead + Unpin + Send + 'static> PositionSource for ReplayPositions<R> {
    async fn next_fix(&mut self) -> Result<Option<Coordinate>> {
        if self.emitted > 0 {
            if let Some(interval) = self.interval {
                tokio::time::sleep(interval).await;
            }
        }

        while let Some(line) = self.lines.next_line().await? {
            self.line_no += 1;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let fix = parse_fix(line).map_err(|e| TravelError::PositionError {
                message: format!("line {}: {}", self.line_no, e),
            })?;
            self.emitted += 1;
            return Ok(Some(fix));
        }

        Ok(None)
    }
}
