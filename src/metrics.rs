//! Performance metrics and statistics tracking for the scoring service.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;
use std::time::{Duration, Instant};
use tracing::info;

/// Metrics collector for the prediction endpoint
pub struct ServiceMetrics {
    /// Total prediction requests served successfully
    pub requests_processed: AtomicU64,
    /// Total requests rejected at validation
    pub requests_rejected: AtomicU64,
    /// Total feature rows scored
    pub rows_scored: AtomicU64,
    /// Predictions per class: [negatives, positives]
    class_counts: RwLock<[u64; 2]>,
    /// Request processing times (in microseconds)
    processing_times: RwLock<Vec<u64>>,
    /// Score distribution buckets (0.0-0.1 .. 0.9-1.0)
    score_buckets: RwLock<[u64; 10]>,
    /// Start time for rate calculation
    start_time: Instant,
}

impl ServiceMetrics {
    /// Create a new metrics collector
    pub fn new() -> Self {
        Self {
            requests_processed: AtomicU64::new(0),
            requests_rejected: AtomicU64::new(0),
            rows_scored: AtomicU64::new(0),
            class_counts: RwLock::new([0; 2]),
            processing_times: RwLock::new(Vec::with_capacity(1000)),
            score_buckets: RwLock::new([0; 10]),
            start_time: Instant::now(),
        }
    }

    /// Record a successfully served prediction request
    pub fn record_request(&self, processing_time: Duration, scores: &[f64], predictions: &[u8]) {
        self.requests_processed.fetch_add(1, Ordering::Relaxed);
        self.rows_scored
            .fetch_add(scores.len() as u64, Ordering::Relaxed);

        if let Ok(mut times) = self.processing_times.write() {
            times.push(processing_time.as_micros() as u64);
            // Keep only recent samples for memory efficiency
            if times.len() > 10000 {
                times.drain(0..5000);
            }
        }

        if let Ok(mut buckets) = self.score_buckets.write() {
            for &score in scores {
                let bucket = (score * 10.0).min(9.0) as usize;
                buckets[bucket] += 1;
            }
        }

        if let Ok(mut counts) = self.class_counts.write() {
            for &label in predictions {
                counts[usize::from(label == 1)] += 1;
            }
        }
    }

    /// Record a request rejected at validation
    pub fn record_rejection(&self) {
        self.requests_rejected.fetch_add(1, Ordering::Relaxed);
    }

    /// Get processing time statistics
    pub fn get_processing_stats(&self) -> ProcessingStats {
        let times = match self.processing_times.read() {
            Ok(times) => times,
            Err(_) => return ProcessingStats::default(),
        };
        if times.is_empty() {
            return ProcessingStats::default();
        }

        let mut sorted: Vec<u64> = times.clone();
        sorted.sort();

        let sum: u64 = sorted.iter().sum();
        let count = sorted.len();

        ProcessingStats {
            count: count as u64,
            mean_us: sum / count as u64,
            p50_us: sorted[count / 2],
            p95_us: sorted[(count as f64 * 0.95) as usize],
            p99_us: sorted[(count as f64 * 0.99) as usize],
            max_us: *sorted.last().unwrap_or(&0),
        }
    }

    /// Get current throughput (requests per second)
    pub fn get_throughput(&self) -> f64 {
        let elapsed = self.start_time.elapsed().as_secs_f64();
        if elapsed > 0.0 {
            self.requests_processed.load(Ordering::Relaxed) as f64 / elapsed
        } else {
            0.0
        }
    }

    /// Get score distribution
    pub fn get_score_distribution(&self) -> [u64; 10] {
        self.score_buckets.read().map(|b| *b).unwrap_or([0; 10])
    }

    /// Get prediction counts per class: [negatives, positives]
    pub fn get_class_counts(&self) -> [u64; 2] {
        self.class_counts.read().map(|c| *c).unwrap_or([0; 2])
    }

    /// Print summary statistics
    pub fn print_summary(&self) {
        let requests = self.requests_processed.load(Ordering::Relaxed);
        let rejected = self.requests_rejected.load(Ordering::Relaxed);
        let rows = self.rows_scored.load(Ordering::Relaxed);
        let processing = self.get_processing_stats();
        let throughput = self.get_throughput();
        let [negatives, positives] = self.get_class_counts();
        let score_dist = self.get_score_distribution();

        info!(
            requests = requests,
            rejected = rejected,
            rows_scored = rows,
            throughput = format!("{:.1} req/s", throughput),
            "Scoring service metrics summary"
        );
        info!(
            mean_us = processing.mean_us,
            p50_us = processing.p50_us,
            p95_us = processing.p95_us,
            p99_us = processing.p99_us,
            "Request processing time (μs)"
        );
        info!(
            negatives = negatives,
            positives = positives,
            "Predictions by class"
        );

        let total: u64 = score_dist.iter().sum();
        if total > 0 {
            for (i, &count) in score_dist.iter().enumerate() {
                let pct = (count as f64 / total as f64) * 100.0;
                info!(
                    "score bucket {:.1}-{:.1}: {} ({:.1}%)",
                    i as f64 / 10.0,
                    (i + 1) as f64 / 10.0,
                    count,
                    pct
                );
            }
        }
    }
}

impl Default for ServiceMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Processing time statistics
#[derive(Debug, Default)]
pub struct ProcessingStats {
    pub count: u64,
    pub mean_us: u64,
    pub p50_us: u64,
    pub p95_us: u64,
    pub p99_us: u64,
    pub max_us: u64,
}

/// Real-time metrics reporter that prints periodic summaries
pub struct MetricsReporter {
    metrics: std::sync::Arc<ServiceMetrics>,
    interval_secs: u64,
}

impl MetricsReporter {
    pub fn new(metrics: std::sync::Arc<ServiceMetrics>, interval_secs: u64) -> Self {
        Self {
            metrics,
            interval_secs,
        }
    }

    /// Start the periodic reporting task
    pub async fn start(self) {
        let mut interval = tokio::time::interval(Duration::from_secs(self.interval_secs));
        loop {
            interval.tick().await;
            self.metrics.print_summary();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_recording() {
        let metrics = ServiceMetrics::new();

        metrics.record_request(Duration::from_micros(100), &[0.18, 0.87], &[0, 1]);
        metrics.record_request(Duration::from_micros(200), &[0.99], &[1]);
        metrics.record_rejection();

        assert_eq!(metrics.requests_processed.load(Ordering::Relaxed), 2);
        assert_eq!(metrics.requests_rejected.load(Ordering::Relaxed), 1);
        assert_eq!(metrics.rows_scored.load(Ordering::Relaxed), 3);
        assert_eq!(metrics.get_class_counts(), [1, 2]);
    }

    #[test]
    fn test_score_distribution_buckets() {
        let metrics = ServiceMetrics::new();

        metrics.record_request(Duration::from_micros(50), &[0.05, 0.55, 1.0], &[0, 1, 1]);

        let dist = metrics.get_score_distribution();
        assert_eq!(dist[0], 1);
        assert_eq!(dist[5], 1);
        // 1.0 lands in the top bucket
        assert_eq!(dist[9], 1);
    }

    #[test]
    fn test_processing_stats() {
        let metrics = ServiceMetrics::new();

        for us in [100, 200, 300] {
            metrics.record_request(Duration::from_micros(us), &[0.5], &[1]);
        }

        let stats = metrics.get_processing_stats();
        assert_eq!(stats.count, 3);
        assert_eq!(stats.mean_us, 200);
        assert_eq!(stats.max_us, 300);
    }
}
