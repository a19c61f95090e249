use std::time::Duration;

pub struct Math {}
impl Math {
    /// # Mean of a list of durations
    /// sum of the durations divided by the count, truncated to whole nanoseconds.
    ///
    /// ## Returns
    /// * `Option<Duration>` - `None` for an empty list
    pub fn mean(times: &[Duration]) -> Option<Duration> {
        if times.is_empty() {
            return None;
        }

        let total: u128 = times.iter().map(Duration::as_nanos).sum();
        let mean = total / times.len() as u128;

        let secs = (mean / 1_000_000_000) as u64;
        let nanos = (mean % 1_000_000_000) as u32;
        Some(Duration::new(secs, nanos))
    }

    /// # Smallest duration in a list
    /// the first of equal values wins
    pub fn min(times: &[Duration]) -> Option<Duration> {
        let mut fastest: Option<Duration> = None;
        for time in times {
            match fastest {
                Some(current) if *time >= current => {}
                _ => fastest = Some(*time),
            }
        }

        fastest
    }
}
