use crate::connection_settings::KafkaConnectionSettings;
use anyhow::bail;
use rdkafka::Offset;

#[derive(Debug)]
pub struct ReadMessagesQuery {
    pub connection_settings: KafkaConnectionSettings,
    pub topic: String,
    pub partition: i32,
    pub start_offset: StartOffset,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum StartOffset {
    Beginning,
    End,
    Offset(i64),
}

impl StartOffset {
    /// -2 and -1 are the oldest/newest sentinels of the CLI surface.
    pub fn from_raw(offset: i64) -> Result<Self, anyhow::Error> {
        match offset {
            -2 => Ok(StartOffset::Beginning),
            -1 => Ok(StartOffset::End),
            offset if offset >= 0 => Ok(StartOffset::Offset(offset)),
            other => bail!(
                "Offset {other} is not a valid start offset, use -2 (oldest), -1 (newest) or an explicit offset"
            ),
        }
    }
}

impl From<StartOffset> for Offset {
    fn from(value: StartOffset) -> Self {
        match value {
            StartOffset::Beginning => Offset::Beginning,
            StartOffset::End => Offset::End,
            StartOffset::Offset(offset) => Offset::Offset(offset),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinels_map_to_log_ends() {
        assert_eq!(StartOffset::from_raw(-2).unwrap(), StartOffset::Beginning);
        assert_eq!(StartOffset::from_raw(-1).unwrap(), StartOffset::End);
    }

    #[test]
    fn explicit_offsets_pass_through() {
        assert_eq!(StartOffset::from_raw(100).unwrap(), StartOffset::Offset(100));
        assert_eq!(StartOffset::from_raw(0).unwrap(), StartOffset::Offset(0));
    }

    #[test]
    fn other_negative_offsets_are_rejected() {
        assert!(StartOffset::from_raw(-3).is_err());
    }
}
