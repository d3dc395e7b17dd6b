/// Partition assignment policy for produced messages.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Partitioner {
    /// librdkafka default, hash of the message key.
    Hash,
    /// Uniform random assignment.
    Random,
    /// Every message goes to the given partition.
    Manual(i32),
}

impl Partitioner {
    /// The "random" scheme wins over an explicit partition index; without
    /// either, key hashing applies.
    pub fn from_scheme(scheme: &str, partition: i32) -> Partitioner {
        if scheme == "random" {
            Partitioner::Random
        } else if partition >= 0 {
            Partitioner::Manual(partition)
        } else {
            Partitioner::Hash
        }
    }

    pub fn partition(&self) -> Option<i32> {
        match self {
            Partitioner::Manual(partition) => Some(*partition),
            Partitioner::Hash | Partitioner::Random => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_scheme_wins_over_partition_index() {
        assert_eq!(Partitioner::from_scheme("random", 3), Partitioner::Random);
    }

    #[test]
    fn non_negative_partition_selects_manual() {
        assert_eq!(
            Partitioner::from_scheme("hash", 2),
            Partitioner::Manual(2)
        );
        assert_eq!(Partitioner::from_scheme("manual", 0).partition(), Some(0));
    }

    #[test]
    fn defaults_to_key_hashing() {
        assert_eq!(Partitioner::from_scheme("hash", -1), Partitioner::Hash);
        assert_eq!(Partitioner::from_scheme("hash", -1).partition(), None);
    }
}
