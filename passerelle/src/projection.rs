use std::cmp::Reverse;

use crate::ledger::ProgressLedger;
use crate::store::ContentStore;

use chrono::{DateTime, Duration, Utc};

use passerelle_models::comments::Comment;
use passerelle_models::media::{Post, PostPayload};

use serde::Serialize;

/// Display-only aggregates over the store.
///
/// Recomputed from the current state on every call, nothing is cached.
#[derive(Serialize, PartialEq, Eq, Clone, Debug, Default)]
pub struct HubStats {
    pub posts: usize,
    pub blogs: usize,

    /// Comments across posts and blogs; replies tallied separately.
    pub total_comments: usize,
    pub total_replies: usize,

    /// Likes across every likeable entity.
    pub total_likes: u64,

    pub poll_votes: u64,

    /// Posts published in the 7 days preceding `now`.
    pub posts_this_week: usize,
}

pub fn hub_stats(store: &ContentStore, now: DateTime<Utc>) -> HubStats {
    let week_ago = (now - Duration::days(7)).timestamp();

    let mut stats = HubStats {
        posts: store.posts().len(),
        blogs: store.blogs().len(),
        ..Default::default()
    };

    for post in store.posts() {
        stats.total_likes += post.like_count;

        if post.timestamp > week_ago {
            stats.posts_this_week += 1;
        }

        if let PostPayload::Poll { options, .. } = &post.payload {
            stats.poll_votes += options.iter().map(|option| option.vote_count).sum::<u64>();
        }

        tally_comments(&mut stats, &post.comments);
    }

    for blog in store.blogs() {
        stats.total_likes += blog.like_count;

        tally_comments(&mut stats, &blog.comments);
    }

    stats
}

fn tally_comments(stats: &mut HubStats, comments: &[Comment]) {
    for comment in comments {
        stats.total_comments += 1;
        stats.total_likes += comment.like_count;

        for reply in &comment.replies {
            stats.total_replies += 1;
            stats.total_likes += reply.like_count;
        }
    }
}

/// Posts ordered by engagement, most liked and discussed first.
///
/// Ties break toward the most recently created post.
pub fn trending(store: &ContentStore) -> Vec<&Post> {
    let mut posts: Vec<&Post> = store.posts().iter().collect();

    posts.sort_by_key(|post| Reverse((engagement(post), post.id)));

    posts
}

fn engagement(post: &Post) -> u64 {
    post.like_count + post.comments.len() as u64
}

/// What an achievement threshold is measured against.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Metric {
    ModulesCompleted,
    KeysEarned,
    PostsPublished,
    CommentsWritten,
}

pub struct Achievement {
    pub title: &'static str,
    pub description: &'static str,
    pub metric: Metric,
    pub threshold: u64,
}

/// The fixed achievement board shown on the profile page.
pub const ACHIEVEMENTS: [Achievement; 4] = [
    Achievement {
        title: "First Steps",
        description: "Completed your first module",
        metric: Metric::ModulesCompleted,
        threshold: 1,
    },
    Achievement {
        title: "Key Collector",
        description: "Earned 5 keys",
        metric: Metric::KeysEarned,
        threshold: 5,
    },
    Achievement {
        title: "Conversation Starter",
        description: "Shared 5 posts with the community",
        metric: Metric::PostsPublished,
        threshold: 5,
    },
    Achievement {
        title: "Community Helper",
        description: "Answered 5 fellow students",
        metric: Metric::CommentsWritten,
        threshold: 5,
    },
];

#[derive(PartialEq, Eq, Clone, Debug)]
pub struct AchievementStatus {
    pub title: &'static str,
    pub description: &'static str,
    pub progress: u64,
    pub threshold: u64,
    pub earned: bool,
}

/// Achievement board for the current session, earned at threshold.
pub fn achievements(store: &ContentStore, ledger: &ProgressLedger) -> Vec<AchievementStatus> {
    let comments_written = store
        .posts()
        .iter()
        .map(|post| post.comments.len())
        .chain(store.blogs().iter().map(|blog| blog.comments.len()))
        .sum::<usize>() as u64;

    ACHIEVEMENTS
        .iter()
        .map(|achievement| {
            let progress = match achievement.metric {
                Metric::ModulesCompleted => ledger.completed_count() as u64,
                Metric::KeysEarned => ledger.keys() as u64,
                Metric::PostsPublished => store.posts().len() as u64,
                Metric::CommentsWritten => comments_written,
            };

            AchievementStatus {
                title: achievement.title,
                description: achievement.description,
                progress,
                threshold: achievement.threshold,
                earned: progress >= achievement.threshold,
            }
        })
        .collect()
}

/// The "3/7 modules" style counter.
pub fn module_progress(ledger: &ProgressLedger) -> (usize, usize) {
    (ledger.completed_count(), ledger.catalog().len())
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::store::{CommentTarget, LikeTarget};

    use passerelle_models::media::PollOption;

    fn text(body: &str) -> PostPayload {
        PostPayload::Text { body: body.into() }
    }

    #[test]
    fn stats_cover_posts_blogs_and_the_week_window() {
        let mut store = ContentStore::new();
        let now = Utc::now();

        let recent = store
            .create_post_at("Sarah M.", "Arrival", text("fresh"), now.timestamp() - 3_600)
            .unwrap()
            .id;
        store
            .create_post_at(
                "Alex K.",
                "Arrival",
                text("stale"),
                (now - Duration::days(30)).timestamp(),
            )
            .unwrap();
        let blog = store
            .create_blog("Maria L.", "Tips", "Banking", "How to open an account")
            .unwrap()
            .id;

        let comment = store
            .comment(recent, CommentTarget::Post, "Alex K.", "Welcome!")
            .unwrap()
            .id;
        store.reply(recent, comment, "Sarah M.", "Merci!").unwrap();
        store.comment(blog, CommentTarget::Blog, "Sarah M.", "Useful").unwrap();

        store.like(recent, LikeTarget::Post).unwrap();
        store.like(comment, LikeTarget::Comment).unwrap();

        let stats = hub_stats(&store, now);

        assert_eq!(stats.posts, 2);
        assert_eq!(stats.blogs, 1);
        assert_eq!(stats.total_comments, 2);
        assert_eq!(stats.total_replies, 1);
        assert_eq!(stats.total_likes, 2);
        assert_eq!(stats.posts_this_week, 1);
    }

    #[test]
    fn poll_votes_are_tallied() {
        let mut store = ContentStore::new();

        let poll = store
            .create_post(
                "Maria L.",
                "Study Group",
                PostPayload::Poll {
                    question: "Which day?".into(),
                    options: vec![PollOption::new("Sat"), PollOption::new("Sun")],
                },
            )
            .unwrap()
            .id;

        store.vote(poll, 0).unwrap();
        store.vote(poll, 1).unwrap();
        store.vote(poll, 1).unwrap();

        assert_eq!(hub_stats(&store, Utc::now()).poll_votes, 3);
    }

    #[test]
    fn trending_orders_by_engagement_then_recency() {
        let mut store = ContentStore::new();

        let quiet = store.create_post("Sarah M.", "Arrival", text("quiet")).unwrap().id;
        let busy = store.create_post("Alex K.", "Arrival", text("busy")).unwrap().id;
        let tied = store.create_post("Maria L.", "Arrival", text("tied")).unwrap().id;

        store.like(busy, LikeTarget::Post).unwrap();
        store.like(busy, LikeTarget::Post).unwrap();
        store
            .comment(busy, CommentTarget::Post, "Maria L.", "Great")
            .unwrap();

        let order: Vec<_> = trending(&store).iter().map(|post| post.id).collect();

        // `tied` and `quiet` both have zero engagement; `tied` is newer.
        assert_eq!(order, vec![busy, tied, quiet]);
    }

    #[test]
    fn achievements_flip_exactly_at_their_thresholds() {
        let mut store = ContentStore::new();
        let mut ledger = ProgressLedger::new();

        let board = achievements(&store, &ledger);
        assert!(board.iter().all(|status| !status.earned));

        ledger.complete_module("school").unwrap();

        let board = achievements(&store, &ledger);
        let first_steps = board.iter().find(|s| s.title == "First Steps").unwrap();
        assert!(first_steps.earned);
        assert_eq!(first_steps.progress, 1);

        for n in 0..5 {
            let post = store
                .create_post("Sarah M.", "Arrival", text(&format!("post {n}")))
                .unwrap()
                .id;
            store
                .comment(post, CommentTarget::Post, "Alex K.", "Nice")
                .unwrap();
        }

        let board = achievements(&store, &ledger);
        assert!(board.iter().find(|s| s.title == "Conversation Starter").unwrap().earned);
        assert!(board.iter().find(|s| s.title == "Community Helper").unwrap().earned);
        assert!(!board.iter().find(|s| s.title == "Key Collector").unwrap().earned);

        assert_eq!(module_progress(&ledger), (1, 6));
    }
}
