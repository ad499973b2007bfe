#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub mean: f64,
    pub median: f64,
    pub p95: f64,
    pub count: usize,
}


impl Summary {
    pub fn from_samples(samples: &[f64]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }
        let mut sorted = samples.to_vec();
        sorted.sort_by(f64::total_cmp);
        
        Some(Summary {
            mean: statistical::mean(samples),
            median: statistical::median(samples),
            p95: quantile(&sorted, 0.95),
            count: samples.len(),
        })
    }
}


/// Linear-interpolated quantile of already sorted data, `q` in `[0, 1]`.
pub fn quantile(sorted: &[f64], q: f64) -> f64 {
    match sorted.len() {
        0 => f64::NAN,
        1 => sorted[0],
        n => {
            let h = (n - 1) as f64 * q.clamp(0.0, 1.0);
            let lo = h.floor() as usize;
            let hi = h.ceil() as usize;
            sorted[lo] + (h - lo as f64) * (sorted[hi] - sorted[lo])
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    
    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }
    
    #[test]
    fn p95_interpolates_between_ranks() {
        let data: Vec<f64> = (1..=10).map(f64::from).collect();
        // h = 9 * 0.95 = 8.55 -> 9 + 0.55 * (10 - 9)
        assert!(close(quantile(&data, 0.95), 9.55));
        assert!(close(quantile(&data, 0.5), 5.5));
        assert!(close(quantile(&data, 0.0), 1.0));
        assert!(close(quantile(&data, 1.0), 10.0));
    }
    
    #[test]
    fn summary_of_unsorted_samples() {
        let s = Summary::from_samples(&[15.1, 12.3, 9.0]).unwrap();
        assert_eq!(s.count, 3);
        assert!(close(s.mean, 12.133333333333333));
        assert!(close(s.median, 12.3));
        // sorted [9.0, 12.3, 15.1], h = 1.9
        assert!(close(s.p95, 12.3 + 0.9 * (15.1 - 12.3)));
    }
    
    #[test]
    fn single_and_empty() {
        let s = Summary::from_samples(&[4.0]).unwrap();
        assert_eq!((s.mean, s.median, s.p95, s.count), (4.0, 4.0, 4.0, 1));
        assert!(Summary::from_samples(&[]).is_none());
    }
}
