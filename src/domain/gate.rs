/// Shared overwrite policy for provisioned dependency entries and files.
///
/// A proposed write goes through when the target is absent or the caller
/// forces it; an existing target otherwise wins.
pub fn should_write(exists: bool, force: bool) -> bool {
    force || !exists
}
