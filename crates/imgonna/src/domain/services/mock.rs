//! Mock coaching responses
//!
//! Deterministic stand-in used when no upstream credential is configured.
//! Rules are matched case-insensitively on substrings; first match wins:
//! guitar, then coding, then a generic fallback that quotes the goal.

use crate::domain::{GoalOutcome, MediaItem, MediaRecommendations};

const GUITAR_RESPONSE: &str = r#"🎸 That's a fantastic goal! Learning guitar is incredibly rewarding and a great way to express creativity.

Here are some concrete steps to get started:

1. **Get the basics right**: Start with a beginner-friendly acoustic guitar and learn proper posture and hand positioning. Focus on basic chords like G, C, D, and Em.

2. **Practice regularly**: Even 15-20 minutes daily is better than long, infrequent sessions. Use apps like Yousician or Guitar Tabs, or find a local teacher for structured lessons.

3. **Set small milestones**: Learn one new chord each week, then work on switching between them smoothly. Pick a simple song you love and make it your first goal.

Remember, everyone starts somewhere, and your fingers will feel awkward at first - that's completely normal! Stay patient with yourself and celebrate small victories. You've got this! 🎵"#;

const CODING_RESPONSE: &str = r#"💻 Excellent choice! Learning to code opens up incredible opportunities and is a skill that keeps growing in value.

Here's your roadmap to success:

1. **Choose your first language**: Start with Python for its beginner-friendly syntax, or JavaScript if you're interested in web development. Both have great learning resources and job prospects.

2. **Build projects, not just tutorials**: After learning basics, create small projects like a calculator, to-do list, or personal website. Building things reinforces learning better than passive consumption.

3. **Join the community**: Use platforms like GitHub to share your work, Stack Overflow for questions, and find local coding meetups or online communities for support and networking.

Start with free resources like freeCodeCamp, Codecademy, or YouTube tutorials. Remember, coding is all about problem-solving - embrace the challenges and celebrate every bug you fix! 🚀"#;

/// Which canned response a goal maps to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockTopic {
    Guitar,
    Coding,
    General,
}

impl MockTopic {
    /// Classify a goal by case-insensitive substring rules
    pub fn classify(goal: &str) -> Self {
        let lower = goal.to_lowercase();
        let learn = lower.contains("learn");

        if learn && lower.contains("guitar") {
            MockTopic::Guitar
        } else if learn && (lower.contains("code") || lower.contains("program")) {
            MockTopic::Coding
        } else {
            MockTopic::General
        }
    }
}

/// Build the deterministic mock outcome for a goal
pub fn mock_outcome(goal: &str) -> GoalOutcome {
    match MockTopic::classify(goal) {
        MockTopic::Guitar => GoalOutcome::new(GUITAR_RESPONSE, Some(guitar_media())),
        MockTopic::Coding => GoalOutcome::new(CODING_RESPONSE, Some(coding_media())),
        MockTopic::General => GoalOutcome::new(general_response(goal), Some(general_media())),
    }
}

fn general_response(goal: &str) -> String {
    format!(
        r#"That's a wonderful goal! "{goal}" shows great ambition and self-awareness.

Here's how you can make meaningful progress:

1. **Break it down**: Divide your goal into smaller, specific milestones that you can achieve weekly or monthly. This makes the journey less overwhelming and more manageable.

2. **Create accountability**: Share your goal with friends, family, or join online communities related to your interest. Having others know about your commitment increases your likelihood of success.

3. **Track your progress**: Keep a simple journal or use an app to record your daily actions toward this goal. Seeing your progress builds momentum and motivation.

Remember, every expert was once a beginner. Stay consistent, be patient with yourself, and celebrate small wins along the way. You have everything it takes to achieve this goal! 🌟"#
    )
}

fn podcast(title: &str, platform: &str, link: &str, description: &str) -> MediaItem {
    MediaItem::new(title)
        .with_platform(platform)
        .with_link(link)
        .with_description(description)
}

fn stream(title: &str, platform: &str, description: &str) -> MediaItem {
    MediaItem::new(title)
        .with_platform(platform)
        .with_description(description)
}

fn linked(title: &str, link: &str, description: &str) -> MediaItem {
    MediaItem::new(title)
        .with_link(link)
        .with_description(description)
}

fn guitar_media() -> MediaRecommendations {
    MediaRecommendations {
        podcasts: vec![
            podcast(
                "Guitar Lessons and Gear with Tomo Fujita",
                "Spotify",
                "https://open.spotify.com/show/2zRQHGPmBJBGrJvT5vXvAI",
                "Learn from Berklee professor and John Mayer's guitar teacher",
            ),
            podcast(
                "The Guitar Hour Podcast",
                "Apple Podcasts",
                "https://podcasts.apple.com/us/podcast/the-guitar-hour-podcast/id1455379351",
                "Interviews with guitarists and practical playing tips",
            ),
            podcast(
                "No Guitar Is Safe",
                "Spotify",
                "https://open.spotify.com/show/0iI65jLqzxJCYVlHUe9bXm",
                "Jude Gold's deep dives into guitar techniques and history",
            ),
        ],
        streaming: vec![
            stream(
                "JustinGuitar YouTube Channel",
                "YouTube",
                "Free comprehensive guitar lessons from beginner to advanced",
            ),
            stream(
                "Marty Music",
                "YouTube",
                "Popular song tutorials and guitar techniques",
            ),
            stream(
                "Paul Davids",
                "YouTube",
                "Music theory and advanced guitar concepts explained clearly",
            ),
            stream(
                "GuitarLessons365",
                "YouTube",
                "Song-by-song tutorials for popular music",
            ),
        ],
        books: vec![
            linked(
                "Guitar: The First 100 Chords for Guitar by Joseph Alexander",
                "https://www.amazon.com/dp/1910403334",
                "Essential chord reference for beginners",
            ),
            linked(
                "The Guitar Handbook by Ralph Denyer",
                "https://www.amazon.com/dp/0679742751",
                "Comprehensive guide covering all aspects of guitar",
            ),
            linked(
                "Hal Leonard Guitar Method, Complete Edition",
                "https://www.amazon.com/dp/0881881392",
                "Progressive method book with audio examples",
            ),
        ],
        websites: vec![
            linked(
                "Ultimate Guitar",
                "https://www.ultimate-guitar.com",
                "Largest collection of guitar tabs and chords",
            ),
            linked(
                "JustinGuitar",
                "https://www.justinguitar.com",
                "Free structured guitar courses from beginner to advanced",
            ),
            linked(
                "Guitar Tricks",
                "https://www.guitartricks.com",
                "Comprehensive paid platform with step-by-step lessons",
            ),
            linked(
                "Fender Play",
                "https://www.fender.com/play",
                "Fender's official learning platform with guided paths",
            ),
        ],
    }
}

fn coding_media() -> MediaRecommendations {
    MediaRecommendations {
        podcasts: vec![
            podcast(
                "CodeNewbie",
                "Spotify",
                "https://open.spotify.com/show/2T2OwucPOy3dxOCfgyxTMA",
                "Stories and interviews about people learning to code",
            ),
            podcast(
                "Syntax - Tasty Web Development Treats",
                "Apple Podcasts",
                "https://podcasts.apple.com/us/podcast/syntax-tasty-web-development-treats/id1253186678",
                "Full stack web development discussions",
            ),
            podcast(
                "Talk Python To Me",
                "Spotify",
                "https://open.spotify.com/show/4sYdZnbikqCABkYhHH5fZg",
                "Python and its ecosystem explored",
            ),
        ],
        streaming: vec![
            stream(
                "CS50x - Harvard's Introduction to Computer Science",
                "YouTube",
                "Complete Harvard CS course available free",
            ),
            stream(
                "The Coding Train",
                "YouTube",
                "Creative coding tutorials with p5.js and Processing",
            ),
            stream(
                "Traversy Media",
                "YouTube",
                "Web development crash courses and project tutorials",
            ),
            stream(
                "Programming with Mosh",
                "YouTube",
                "Clear programming tutorials for multiple languages",
            ),
        ],
        books: vec![
            linked(
                "Python Crash Course by Eric Matthes",
                "https://www.amazon.com/dp/1718502702",
                "Hands-on, project-based introduction to Python",
            ),
            linked(
                "JavaScript: The Good Parts by Douglas Crockford",
                "https://www.amazon.com/dp/0596517742",
                "Essential JavaScript concepts and best practices",
            ),
            linked(
                "Clean Code by Robert C. Martin",
                "https://www.amazon.com/dp/0132350882",
                "Writing maintainable, professional code",
            ),
        ],
        websites: vec![
            linked(
                "freeCodeCamp",
                "https://www.freecodecamp.org",
                "Free coding bootcamp with certifications",
            ),
            linked(
                "Codecademy",
                "https://www.codecademy.com",
                "Interactive coding lessons in various languages",
            ),
            linked(
                "LeetCode",
                "https://leetcode.com",
                "Coding challenges and interview preparation",
            ),
            linked(
                "MDN Web Docs",
                "https://developer.mozilla.org",
                "Comprehensive web development documentation",
            ),
        ],
    }
}

fn general_media() -> MediaRecommendations {
    MediaRecommendations {
        podcasts: vec![
            podcast(
                "The Tim Ferriss Show",
                "Spotify",
                "https://open.spotify.com/show/5qSUyCrk9KR69lEiXbjwXM",
                "Interviews with world-class performers on habits and routines",
            ),
            podcast(
                "How I Built This",
                "Apple Podcasts",
                "https://podcasts.apple.com/us/podcast/how-i-built-this/id1150510297",
                "Stories of entrepreneurs and innovators",
            ),
        ],
        streaming: vec![
            stream(
                "TED Talks on Goal Setting",
                "YouTube",
                "Inspiring talks on achievement and goal setting",
            ),
            stream(
                "MasterClass",
                "MasterClass",
                "Learn from experts in various fields",
            ),
        ],
        books: vec![
            linked(
                "Atomic Habits by James Clear",
                "https://www.amazon.com/dp/0735211299",
                "Build good habits and break bad ones",
            ),
            linked(
                "The 7 Habits of Highly Effective People by Stephen Covey",
                "https://www.amazon.com/dp/1982137274",
                "Timeless principles for personal effectiveness",
            ),
        ],
        websites: vec![
            linked(
                "Coursera",
                "https://www.coursera.org",
                "Online courses from top universities",
            ),
            linked(
                "Khan Academy",
                "https://www.khanacademy.org",
                "Free educational resources for all subjects",
            ),
        ],
    }
}
