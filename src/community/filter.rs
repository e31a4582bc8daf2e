//! Client-side post search

use crate::model::Post;

/// Whether `post` matches `query` (case-insensitive, title or content).
/// The query is matched as typed, surrounding spaces included.
pub fn matches(post: &Post, query: &str) -> bool {
    let needle = query.to_lowercase();
    if needle.is_empty() {
        return true;
    }
    post.title.to_lowercase().contains(&needle) || post.content.to_lowercase().contains(&needle)
}

/// Posts matching `query`, in their original order. An empty query
/// returns every post.
pub fn filter_posts<'a>(posts: &'a [Post], query: &str) -> Vec<&'a Post> {
    posts.iter().filter(|p| matches(p, query)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: u64, title: &str, content: &str) -> Post {
        Post {
            id,
            title: title.to_string(),
            content: content.to_string(),
            image: None,
            user: None,
            created_at: None,
        }
    }

    fn ids(posts: Vec<&Post>) -> Vec<u64> {
        posts.into_iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_empty_query_returns_everything() {
        let posts = vec![post(1, "A", "a"), post(2, "B", "b")];
        assert_eq!(ids(filter_posts(&posts, "")), vec![1, 2]);
    }

    #[test]
    fn test_query_spaces_are_significant() {
        let posts = vec![
            post(1, "heart health", "walks"),
            post(2, "Heart", "rate"),
        ];
        assert_eq!(ids(filter_posts(&posts, "heart ")), vec![1]);
        assert_eq!(ids(filter_posts(&posts, "heart")), vec![1, 2]);
        assert!(filter_posts(&posts, "   ").is_empty());
    }

    #[test]
    fn test_matches_title_or_body_case_insensitive() {
        let posts = vec![
            post(1, "Cholesterol tips", "Eat more oats"),
            post(2, "Morning runs", "My CHOLESTEROL dropped"),
            post(3, "Sleep", "Eight hours a night"),
        ];
        assert_eq!(ids(filter_posts(&posts, "cholesterol")), vec![1, 2]);
        assert_eq!(ids(filter_posts(&posts, "OATS")), vec![1]);
    }

    #[test]
    fn test_non_matching_query_excludes() {
        let posts = vec![post(1, "Cholesterol tips", "Eat more oats")];
        assert!(filter_posts(&posts, "marathon").is_empty());
    }
}
