//! Filter groups accepted by MangaMad's search page.

use crate::filters::{FilterList, FilterOption, SelectFilter};

static SORT_OPTIONS: &[FilterOption] = &[
    FilterOption::new("views", "Most Views"),
    FilterOption::new("updated_at", "Recently updated"),
    FilterOption::new("created_at", "Recently added"),
    FilterOption::new("name", "A-Z"),
    FilterOption::new("rating", "Rating"),
    FilterOption::new("votes", "Votes"),
];

static STATUS_OPTIONS: &[FilterOption] = &[
    FilterOption::new("all", "All"),
    FilterOption::new("ongoing", "Ongoing"),
    FilterOption::new("completed", "Completed"),
];

/// Tags the site's search accepts. Has to follow the site when it adds or
/// renames tags.
static GENRE_OPTIONS: &[FilterOption] = &[
    FilterOption::new("all", "All"),
    FilterOption::new("action", "Action"),
    FilterOption::new("adaptation", "Adaptation"),
    FilterOption::new("adult", "Adult"),
    FilterOption::new("adventure", "Adventure"),
    FilterOption::new("aliens", "Aliens"),
    FilterOption::new("animals", "Animals"),
    FilterOption::new("anthology", "Anthology"),
    FilterOption::new("award-winning", "Award winning"),
    FilterOption::new("comedy", "Comedy"),
    FilterOption::new("cooking", "Cooking"),
    FilterOption::new("crime", "Crime"),
    FilterOption::new("crossdressing", "Crossdressing"),
    FilterOption::new("delinquents", "Delinquents"),
    FilterOption::new("demons", "Demons"),
    FilterOption::new("doujinshi", "Doujinshi"),
    FilterOption::new("drama", "Drama"),
    FilterOption::new("ecchi", "Ecchi"),
    FilterOption::new("fan-colored", "Fan colored"),
    FilterOption::new("fantasy", "Fantasy"),
    FilterOption::new("food", "Food"),
    FilterOption::new("full-color", "Full color"),
    FilterOption::new("game", "Game"),
    FilterOption::new("gender-bender", "Gender bender"),
    FilterOption::new("genderswap", "Genderswap"),
    FilterOption::new("ghosts", "Ghosts"),
    FilterOption::new("gore", "Gore"),
    FilterOption::new("gossip", "Gossip"),
    FilterOption::new("gyaru", "Gyaru"),
    FilterOption::new("harem", "Harem"),
    FilterOption::new("historical", "Historical"),
    FilterOption::new("horror", "Horror"),
    FilterOption::new("incest", "Incest"),
    FilterOption::new("isekai", "Isekai"),
    FilterOption::new("josei", "Josei"),
    FilterOption::new("kids", "Kids"),
    FilterOption::new("loli", "Loli"),
    FilterOption::new("lolicon", "Lolicon"),
    FilterOption::new("long-strip", "Long strip"),
    FilterOption::new("mafia", "Mafia"),
    FilterOption::new("magic", "Magic"),
    FilterOption::new("magical-girls", "Magical girls"),
    FilterOption::new("manhwa", "Manhwa"),
    FilterOption::new("martial-arts", "Martial arts"),
    FilterOption::new("mature", "Mature"),
    FilterOption::new("mecha", "Mecha"),
    FilterOption::new("medical", "Medical"),
    FilterOption::new("military", "Military"),
    FilterOption::new("monster-girls", "Monster girls"),
    FilterOption::new("monsters", "Monsters"),
    FilterOption::new("music", "Music"),
    FilterOption::new("mystery", "Mystery"),
    FilterOption::new("ninja", "Ninja"),
    FilterOption::new("office-workers", "Office workers"),
    FilterOption::new("official-colored", "Official colored"),
    FilterOption::new("one-shot", "One shot"),
    FilterOption::new("parody", "Parody"),
    FilterOption::new("philosophical", "Philosophical"),
    FilterOption::new("police", "Police"),
    FilterOption::new("post-apocalyptic", "Post apocalyptic"),
    FilterOption::new("psychological", "Psychological"),
    FilterOption::new("reincarnation", "Reincarnation"),
    FilterOption::new("reverse-harem", "Reverse harem"),
    FilterOption::new("romance", "Romance"),
    FilterOption::new("samurai", "Samurai"),
    FilterOption::new("school-life", "School life"),
    FilterOption::new("sci-fi", "Sci fi"),
    FilterOption::new("seinen", "Seinen"),
    FilterOption::new("shota", "Shota"),
    FilterOption::new("shotacon", "Shotacon"),
    FilterOption::new("shoujo", "Shoujo"),
    FilterOption::new("shoujo-ai", "Shoujo ai"),
    FilterOption::new("shounen", "Shounen"),
    FilterOption::new("shounen-ai", "Shounen ai"),
    FilterOption::new("slice-of-life", "Slice of life"),
    FilterOption::new("smut", "Smut"),
    FilterOption::new("space", "Space"),
    FilterOption::new("sports", "Sports"),
    FilterOption::new("super-power", "Super power"),
    FilterOption::new("superhero", "Superhero"),
    FilterOption::new("supernatural", "Supernatural"),
    FilterOption::new("survival", "Survival"),
    FilterOption::new("suspense", "Suspense"),
    FilterOption::new("thriller", "Thriller"),
    FilterOption::new("time-travel", "Time travel"),
    FilterOption::new("toomics", "Toomics"),
    FilterOption::new("traditional-games", "Traditional games"),
    FilterOption::new("tragedy", "Tragedy"),
    FilterOption::new("user-created", "User created"),
    FilterOption::new("vampire", "Vampire"),
    FilterOption::new("vampires", "Vampires"),
    FilterOption::new("video-games", "Video games"),
    FilterOption::new("virtual-reality", "Virtual reality"),
    FilterOption::new("web-comic", "Web comic"),
    FilterOption::new("webtoon", "Webtoon"),
    FilterOption::new("wuxia", "Wuxia"),
    FilterOption::new("yaoi", "Yaoi"),
    FilterOption::new("yuri", "Yuri"),
    FilterOption::new("zombies", "Zombies"),
];

/// Sort, genre and status groups, in the order they're written to the URL.
pub fn filter_list() -> FilterList {
    FilterList::new(vec![
        SelectFilter::new("Sort", "sort", SORT_OPTIONS, true),
        SelectFilter::new("Genre", "genre", GENRE_OPTIONS, true),
        SelectFilter::new("Status", "status", STATUS_OPTIONS, true),
    ])
}
