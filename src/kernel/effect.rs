use compact_str::CompactString;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Ask the shell's router to change the current path. The kernel decides
    /// where to go; only the shell actually routes.
    Navigate(CompactString),
}
