//! Cross-post aggregates: the question bank and the company index.

use serde::{Deserialize, Serialize};

use pw_db::{
    Store,
    models::{Difficulty, PostFilter, Question},
    repositories::{label_key, post, question, same_label},
};

use crate::{dedup::dedupe_by, normalization::search_matches};

/// A question together with the company it was asked at
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankQuestion {
    pub question: Question,
    pub company: String,
    pub role: String,
}

/// Question bank filters; unset fields match everything
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionFilter {
    /// Topic name, compared case-insensitively
    pub topic: Option<String>,
    pub difficulty: Option<Difficulty>,
    /// Company name, compared case-insensitively
    pub company: Option<String>,
    /// Accent and punctuation insensitive substring of the question text
    pub search: Option<String>,
}

impl QuestionFilter {
    fn matches(&self, entry: &BankQuestion) -> bool {
        let q = &entry.question;

        self.topic
            .as_deref()
            .is_none_or(|t| same_label(&q.topic, t))
            && self.difficulty.is_none_or(|d| q.difficulty == d)
            && self
                .company
                .as_deref()
                .is_none_or(|c| same_label(&entry.company, c))
            && self
                .search
                .as_deref()
                .is_none_or(|s| search_matches(&q.text, s))
    }
}

/// Every distinct question across all posts, in store order.
///
/// Filters apply first, then questions are collapsed by exact text. When the same
/// question was asked at several companies, the entry keeps the company and topic of
/// its first occurrence. Questions whose post no longer exists are skipped.
pub fn question_bank(store: &Store, filter: &QuestionFilter) -> Vec<BankQuestion> {
    let entries: Vec<BankQuestion> = question::list_all(store)
        .into_iter()
        .filter_map(|q| {
            let Some(post) = post::find_by_id(store, &q.post_id) else {
                tracing::debug!(question_id = %q.id, post_id = %q.post_id, "Skipping question without post");
                return None;
            };
            Some(BankQuestion {
                question: q.clone(),
                company: post.company_info.company.clone(),
                role: post.company_info.role.clone(),
            })
        })
        .filter(|entry| filter.matches(entry))
        .collect();

    dedupe_by(&entries, |entry| entry.question.text.clone())
}

/// Number of posts about one company
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyCount {
    pub company: String,
    pub post_count: usize,
}

/// Companies in feed order (most recent post first), case-insensitively merged
pub fn companies(store: &Store) -> Vec<CompanyCount> {
    let posts = post::list(store, &PostFilter::default());
    let names: Vec<String> = posts
        .iter()
        .map(|p| p.company_info.company.clone())
        .collect();

    dedupe_by(&names, |name| label_key(name))
        .into_iter()
        .map(|company| {
            let key = label_key(&company);
            let post_count = names.iter().filter(|name| label_key(name) == key).count();
            CompanyCount {
                company,
                post_count,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pw_db::seed;

    fn texts(bank: &[BankQuestion]) -> Vec<&str> {
        bank.iter().map(|b| b.question.text.as_str()).collect()
    }

    #[test]
    fn test_bank_collapses_duplicate_text() {
        let store = Store::seeded().unwrap();
        let bank = question_bank(&store, &QuestionFilter::default());

        // 8 questions, 2 of them repeats
        assert_eq!(bank.len(), 6);
        assert_eq!(
            texts(&bank),
            vec![
                "Reverse a linked list in groups of k",
                "Design a URL shortener",
                "Tell me about a time you disagreed with a teammate",
                "Find the longest palindromic substring",
                "Explain the difference between processes and threads",
                "Implement an LRU cache",
            ]
        );
    }

    #[test]
    fn test_first_occurrence_keeps_company() {
        let store = Store::seeded().unwrap();
        let bank = question_bank(&store, &QuestionFilter::default());

        let url = bank
            .iter()
            .find(|b| b.question.text == "Design a URL shortener")
            .unwrap();
        assert_eq!(url.question.id, "q2");
        assert_eq!(url.company, "Google");
    }

    #[test]
    fn test_company_filter_applies_before_dedup() {
        let store = Store::seeded().unwrap();
        let filter = QuestionFilter {
            company: Some("amazon".to_string()),
            ..Default::default()
        };
        let bank = question_bank(&store, &filter);

        let ids: Vec<_> = bank.iter().map(|b| b.question.id.as_str()).collect();
        assert_eq!(ids, vec!["q5", "q6"]);
        assert!(bank.iter().all(|b| b.company == "Amazon"));
    }

    #[test]
    fn test_topic_difficulty_and_search_filters() {
        let store = Store::seeded().unwrap();

        let dsa = QuestionFilter {
            topic: Some("dsa".to_string()),
            difficulty: Some(Difficulty::Medium),
            ..Default::default()
        };
        assert_eq!(question_bank(&store, &dsa).len(), 3);

        let search = QuestionFilter {
            search: Some("lru-CACHE".to_string()),
            ..Default::default()
        };
        assert_eq!(texts(&question_bank(&store, &search)), vec!["Implement an LRU cache"]);
    }

    #[test]
    fn test_question_without_post_is_skipped() {
        let mut tables = seed::tables();
        tables.questions[0].post_id = "gone".to_string();
        let store = Store::new(tables).unwrap();

        let bank = question_bank(&store, &QuestionFilter::default());
        assert!(bank.iter().all(|b| b.question.id != "q1"));
    }

    #[test]
    fn test_companies() {
        let store = Store::seeded().unwrap();
        let companies = companies(&store);

        let pairs: Vec<_> = companies
            .iter()
            .map(|c| (c.company.as_str(), c.post_count))
            .collect();
        assert_eq!(
            pairs,
            vec![("Flipkart", 1), ("Microsoft", 1), ("Google", 2), ("Amazon", 1)]
        );
    }

    #[test]
    fn test_companies_merge_non_ascii_case_variants() {
        let mut tables = seed::tables();
        for post in &mut tables.posts {
            post.company_info.company = match post.id.as_str() {
                "i1" => "ÉCOLE".to_string(),
                "i3" => "école".to_string(),
                _ => continue,
            };
        }
        let store = Store::new(tables).unwrap();

        let companies = companies(&store);
        let ecole = companies
            .iter()
            .find(|c| label_key(&c.company) == "école")
            .expect("école should be listed once");
        assert_eq!(ecole.company, "ÉCOLE");
        assert_eq!(ecole.post_count, 2);
        assert_eq!(
            companies.iter().filter(|c| label_key(&c.company) == "école").count(),
            1
        );
    }

    #[test]
    fn test_topic_filter_folds_non_ascii_case() {
        let mut tables = seed::tables();
        tables.questions[5].topic = "Système d'exploitation".to_string();
        let store = Store::new(tables).unwrap();

        let filter = QuestionFilter {
            topic: Some("SYSTÈME D'EXPLOITATION".to_string()),
            ..Default::default()
        };
        let ids: Vec<_> = question_bank(&store, &filter)
            .into_iter()
            .map(|b| b.question.id)
            .collect();
        assert_eq!(ids, vec!["q6"]);
    }
}
