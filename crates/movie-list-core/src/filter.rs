use movie_list_models::Movie;

/// Case-insensitive substring filter over movie titles.
///
/// Backs every collection's search box. Order-preserving; an empty query
/// returns the input unchanged.
pub fn filter_by_title(movies: &[Movie], query: &str) -> Vec<Movie> {
    if query.is_empty() {
        return movies.to_vec();
    }
    let needle = query.to_lowercase();
    movies
        .iter()
        .filter(|m| m.title.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Same filter applied to list names (the "search my lists" box).
pub fn filter_names<'a, I>(names: I, query: &str) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let needle = query.to_lowercase();
    names
        .into_iter()
        .filter(|n| needle.is_empty() || n.to_lowercase().contains(&needle))
        .map(|n| n.to_string())
        .collect()
}
