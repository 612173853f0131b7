//! Built-in sample data, used when no seed file is configured.

use chrono::{DateTime, Utc};

use crate::{
    models::{
        Academics, ApplicationType, Comment, CompanyInfo, Difficulty, Outcome, Personal, Post,
        PostMain, PostStats, PostType, Question, Resource, ResourceType, User, UserRole,
    },
    store::StoreTables,
};

/// All sample tables
pub fn tables() -> StoreTables {
    StoreTables {
        users: users(),
        posts: posts(),
        stats: stats(),
        questions: questions(),
        resources: resources(),
        comments: comments(),
    }
}

fn at(timestamp: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(timestamp)
        .expect("seed timestamps are valid RFC 3339")
        .with_timezone(&Utc)
}

fn user(
    id: &str,
    name: &str,
    institution: &str,
    branch: &str,
    graduation_year: i32,
    role: UserRole,
    bio: Option<&str>,
    expertise: &[&str],
) -> User {
    User {
        id: id.to_string(),
        personal: Personal {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
            avatar: None,
            bio: bio.map(str::to_string),
        },
        academics: Academics {
            institution: institution.to_string(),
            branch: branch.to_string(),
            graduation_year,
        },
        role,
        expertise: expertise.iter().map(|e| e.to_string()).collect(),
    }
}

pub fn users() -> Vec<User> {
    vec![
        user(
            "u1",
            "Aarav Sharma",
            "IIT Delhi",
            "Computer Science",
            2023,
            UserRole::Mentor,
            Some("SDE at Google. Happy to help with DSA and system design prep."),
            &["DSA", "System Design"],
        ),
        user(
            "u2",
            "Priya Patel",
            "NIT Trichy",
            "Electronics",
            2025,
            UserRole::Learner,
            Some("Final year student preparing for placements."),
            &[],
        ),
        user(
            "u3",
            "Rohan Mehta",
            "BITS Pilani",
            "Computer Science",
            2022,
            UserRole::Mentor,
            Some("Backend engineer at Amazon."),
            &["Backend", "Operating Systems", "System Design"],
        ),
        user(
            "u4",
            "Sneha Iyer",
            "VIT Vellore",
            "Information Technology",
            2025,
            UserRole::Learner,
            None,
            &[],
        ),
        user(
            "u5",
            "Kabir Singh",
            "IIIT Hyderabad",
            "Computer Science",
            2021,
            UserRole::Mentor,
            Some("Staff engineer, interviewer for 200+ loops."),
            &["Behavioral", "Career Guidance"],
        ),
    ]
}

pub fn posts() -> Vec<Post> {
    vec![
        Post {
            id: "i1".to_string(),
            main: PostMain {
                author_id: "u1".to_string(),
                title: "Google SDE-1 interview experience".to_string(),
                description: "Four rounds: two DSA, one system design, one Googleyness."
                    .to_string(),
                created_at: at("2024-03-05T09:30:00Z"),
                updated_at: at("2024-03-05T09:30:00Z"),
                post_type: PostType::Interview,
            },
            company_info: CompanyInfo {
                company: "Google".to_string(),
                role: "Software Engineer".to_string(),
                application_type: ApplicationType::OnCampus,
                outcome: Outcome::Selected,
            },
            tags: vec!["dsa".to_string(), "system-design".to_string()],
        },
        Post {
            id: "i2".to_string(),
            main: PostMain {
                author_id: "u2".to_string(),
                title: "Microsoft internship interview".to_string(),
                description: "Online assessment followed by a single technical round."
                    .to_string(),
                created_at: at("2024-04-12T14:00:00Z"),
                updated_at: at("2024-04-13T08:15:00Z"),
                post_type: PostType::Interview,
            },
            company_info: CompanyInfo {
                company: "Microsoft".to_string(),
                role: "SWE Intern".to_string(),
                application_type: ApplicationType::Internship,
                outcome: Outcome::Rejected,
            },
            tags: vec!["internship".to_string()],
        },
        Post {
            id: "i3".to_string(),
            main: PostMain {
                author_id: "u3".to_string(),
                title: "Amazon SDE interview via referral".to_string(),
                description: "Leadership principles were asked in every round.".to_string(),
                created_at: at("2024-02-20T11:00:00Z"),
                updated_at: at("2024-02-20T11:00:00Z"),
                post_type: PostType::Interview,
            },
            company_info: CompanyInfo {
                company: "Amazon".to_string(),
                role: "SDE-1".to_string(),
                application_type: ApplicationType::Referral,
                outcome: Outcome::Selected,
            },
            tags: vec!["leadership-principles".to_string()],
        },
        Post {
            id: "i4".to_string(),
            main: PostMain {
                author_id: "u4".to_string(),
                title: "Flipkart off-campus drive".to_string(),
                description: "Machine coding round followed by a problem solving round."
                    .to_string(),
                created_at: at("2024-05-01T10:00:00Z"),
                updated_at: at("2024-05-01T10:00:00Z"),
                post_type: PostType::Interview,
            },
            company_info: CompanyInfo {
                company: "Flipkart".to_string(),
                role: "SDE-1".to_string(),
                application_type: ApplicationType::OffCampus,
                outcome: Outcome::Pending,
            },
            tags: vec!["machine-coding".to_string()],
        },
        Post {
            id: "a1".to_string(),
            main: PostMain {
                author_id: "u5".to_string(),
                title: "How to prepare for behavioral rounds".to_string(),
                description: "Structure every answer around situation, task, action, result."
                    .to_string(),
                created_at: at("2024-01-15T16:45:00Z"),
                updated_at: at("2024-01-15T16:45:00Z"),
                post_type: PostType::Article,
            },
            company_info: CompanyInfo {
                company: "Google".to_string(),
                role: "Staff Engineer".to_string(),
                application_type: ApplicationType::OffCampus,
                outcome: Outcome::Selected,
            },
            tags: vec!["behavioral".to_string()],
        },
    ]
}

pub fn stats() -> Vec<PostStats> {
    vec![
        PostStats {
            post_id: "i1".to_string(),
            views: 1200,
            likes: 150,
            avg_rating: 4.8,
            rating_count: 45,
            comment_count: 3,
        },
        PostStats {
            post_id: "i2".to_string(),
            views: 430,
            likes: 32,
            avg_rating: 4.1,
            rating_count: 12,
            comment_count: 0,
        },
        PostStats {
            post_id: "i3".to_string(),
            views: 890,
            likes: 97,
            avg_rating: 4.5,
            rating_count: 30,
            comment_count: 1,
        },
        PostStats {
            post_id: "i4".to_string(),
            views: 120,
            likes: 8,
            avg_rating: 0.0,
            rating_count: 0,
            comment_count: 0,
        },
    ]
}

fn question(id: &str, post_id: &str, text: &str, topic: &str, difficulty: Difficulty) -> Question {
    Question {
        id: id.to_string(),
        post_id: post_id.to_string(),
        text: text.to_string(),
        topic: topic.to_string(),
        difficulty,
    }
}

pub fn questions() -> Vec<Question> {
    vec![
        question("q1", "i1", "Reverse a linked list in groups of k", "DSA", Difficulty::Medium),
        question("q2", "i1", "Design a URL shortener", "System Design", Difficulty::Hard),
        question(
            "q3",
            "i1",
            "Tell me about a time you disagreed with a teammate",
            "Behavioral",
            Difficulty::Easy,
        ),
        question(
            "q4",
            "i2",
            "Find the longest palindromic substring",
            "DSA",
            Difficulty::Medium,
        ),
        question("q5", "i3", "Design a URL shortener", "System Design", Difficulty::Hard),
        question(
            "q6",
            "i3",
            "Explain the difference between processes and threads",
            "Operating Systems",
            Difficulty::Easy,
        ),
        question(
            "q7",
            "i4",
            "Tell me about a time you disagreed with a teammate",
            "Behavioral",
            Difficulty::Easy,
        ),
        question("q8", "i4", "Implement an LRU cache", "DSA", Difficulty::Medium),
    ]
}

pub fn resources() -> Vec<Resource> {
    vec![
        Resource {
            id: "r1".to_string(),
            post_id: "i1".to_string(),
            url: "https://example.com/notes/google-prep.pdf".to_string(),
            resource_type: ResourceType::Pdf,
            title: "My DSA revision notes".to_string(),
            description: Some("Patterns I revised the week before the onsite.".to_string()),
        },
        Resource {
            id: "r2".to_string(),
            post_id: "i1".to_string(),
            url: "https://example.com/videos/system-design-basics".to_string(),
            resource_type: ResourceType::Video,
            title: "System design basics".to_string(),
            description: None,
        },
        Resource {
            id: "r3".to_string(),
            post_id: "i3".to_string(),
            url: "https://example.com/leadership-principles".to_string(),
            resource_type: ResourceType::Link,
            title: "Leadership principles cheat sheet".to_string(),
            description: None,
        },
    ]
}

pub fn comments() -> Vec<Comment> {
    vec![
        Comment {
            id: "c1".to_string(),
            post_id: "i1".to_string(),
            author_id: "u2".to_string(),
            text: "Thanks, this is super detailed!".to_string(),
            created_at: at("2024-03-06T10:00:00Z"),
        },
        Comment {
            id: "c2".to_string(),
            post_id: "i1".to_string(),
            author_id: "u3".to_string(),
            text: "The URL shortener question shows up a lot.".to_string(),
            created_at: at("2024-03-07T12:30:00Z"),
        },
        Comment {
            id: "c3".to_string(),
            post_id: "i1".to_string(),
            author_id: "u4".to_string(),
            text: "How long did you prepare for the system design round?".to_string(),
            created_at: at("2024-03-06T18:20:00Z"),
        },
        Comment {
            id: "c4".to_string(),
            post_id: "i3".to_string(),
            author_id: "u1".to_string(),
            text: "Congrats on the offer!".to_string(),
            created_at: at("2024-02-21T09:00:00Z"),
        },
    ]
}
