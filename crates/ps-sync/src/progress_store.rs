/// A single persisted progress value with plain get/set access.
///
/// Implementations own their persistence; callers never see storage errors.
pub trait ProgressStore<T>: Send + Sync {
    fn get(&self) -> T;

    fn set(&self, value: T);
}
