/// Join class fragments, skipping absent and blank ones.
///
/// ```
/// use tribe_club::utils::cn;
///
/// let open = true;
/// assert_eq!(cn(&[Some("chevron"), open.then_some("rotated")]), "chevron rotated");
/// ```
pub fn cn(parts: &[Option<&str>]) -> String {
    parts
        .iter()
        .flatten()
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
