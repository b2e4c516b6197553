//! Bounded memo cache for generated quizzes
//!
//! Replaces the hosting framework's argument-keyed memoization with an
//! explicit component: entries are keyed by source label plus content
//! fingerprint, expire after a TTL, and the oldest entry is evicted once
//! the cache is full.

use chrono::{DateTime, Duration, Utc};
use parking_lot::RwLock;
use std::collections::HashMap;

use crate::types::quiz::Quiz;

struct CacheEntry {
    quiz: Quiz,
    cached_at: DateTime<Utc>,
}

/// In-process quiz cache with capacity and TTL bounds
pub struct QuizCache {
    entries: RwLock<HashMap<String, CacheEntry>>,
    capacity: usize,
    ttl: Duration,
}

impl QuizCache {
    /// Create a cache holding up to `capacity` quizzes for `ttl_secs` each
    pub fn new(capacity: usize, ttl_secs: i64) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            capacity,
            ttl: Duration::seconds(ttl_secs),
        }
    }

    fn key(label: &str, fingerprint: &str) -> String {
        format!("{}:{}", label, fingerprint)
    }

    /// Look up a memoized quiz. Expired entries are treated as misses.
    pub fn get(&self, label: &str, fingerprint: &str) -> Option<Quiz> {
        let key = Self::key(label, fingerprint);
        let entries = self.entries.read();
        let entry = entries.get(&key)?;

        if Utc::now() - entry.cached_at > self.ttl {
            return None;
        }

        Some(entry.quiz.clone())
    }

    /// Memoize a quiz, evicting the oldest entry when full
    pub fn put(&self, label: &str, fingerprint: &str, quiz: Quiz) {
        let key = Self::key(label, fingerprint);
        let mut entries = self.entries.write();

        if entries.len() >= self.capacity && !entries.contains_key(&key) {
            let oldest = entries
                .iter()
                .min_by_key(|(_, entry)| entry.cached_at)
                .map(|(k, _)| k.clone());
            if let Some(oldest) = oldest {
                entries.remove(&oldest);
            }
        }

        entries.insert(
            key,
            CacheEntry {
                quiz,
                cached_at: Utc::now(),
            },
        );
    }

    /// Number of memoized quizzes
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Whether the cache is empty
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::quiz::{QuizAnswer, QuizQuestion};

    fn quiz(text: &str) -> Quiz {
        Quiz {
            questions: vec![QuizQuestion {
                question: text.to_string(),
                answers: vec![
                    QuizAnswer {
                        answer: "a".to_string(),
                        correct: true,
                    },
                    QuizAnswer {
                        answer: "b".to_string(),
                        correct: false,
                    },
                    QuizAnswer {
                        answer: "c".to_string(),
                        correct: false,
                    },
                ],
            }],
        }
    }

    #[test]
    fn test_cache_hit_on_same_key() {
        let cache = QuizCache::new(10, 3600);
        cache.put("france.txt", "abc123", quiz("q1"));

        let hit = cache.get("france.txt", "abc123");
        assert_eq!(hit, Some(quiz("q1")));
    }

    #[test]
    fn test_changed_fingerprint_misses() {
        let cache = QuizCache::new(10, 3600);
        cache.put("france.txt", "abc123", quiz("q1"));

        assert!(cache.get("france.txt", "def456").is_none());
    }

    #[test]
    fn test_expired_entry_misses() {
        let cache = QuizCache::new(10, 0);
        cache.put("france.txt", "abc123", quiz("q1"));

        std::thread::sleep(std::time::Duration::from_millis(5));
        assert!(cache.get("france.txt", "abc123").is_none());
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let cache = QuizCache::new(2, 3600);
        cache.put("a", "1", quiz("qa"));
        std::thread::sleep(std::time::Duration::from_millis(2));
        cache.put("b", "2", quiz("qb"));
        std::thread::sleep(std::time::Duration::from_millis(2));
        cache.put("c", "3", quiz("qc"));

        assert_eq!(cache.len(), 2);
        assert!(cache.get("a", "1").is_none());
        assert!(cache.get("c", "3").is_some());
    }
}
