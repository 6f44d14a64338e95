//! Essay set selection

use std::borrow::Borrow;

use crate::{EmptyInputError, instance::EssayInstance};

/// Returns the instances belonging to essay set `set`, in their original order.
///
/// Never fails; the result is empty when no instance matches.
///
/// # Examples
///
/// ```
/// use essaylab_analysis::{filter, instance::EssayInstance};
///
/// let instances = vec![
///     EssayInstance::new(1, 1, 3),
///     EssayInstance::new(2, 2, 4),
///     EssayInstance::new(3, 1, 5),
/// ];
/// let ids = filter::filter(&instances, 1)
///     .iter()
///     .map(|i| i.id)
///     .collect::<Vec<_>>();
/// assert_eq!(ids, vec![1, 3]);
/// assert!(filter::filter(&instances, 9).is_empty());
/// ```
#[must_use]
pub fn filter<T>(instances: &[T], set: u32) -> Vec<&EssayInstance>
where
    T: Borrow<EssayInstance>,
{
    instances
        .iter()
        .map(Borrow::borrow)
        .filter(|instance| instance.set == set)
        .collect()
}

/// Like [`filter`], but fails when essay set `set` has no instances.
pub fn filter_non_empty<T>(
    instances: &[T],
    set: u32,
) -> Result<Vec<&EssayInstance>, EmptyInputError>
where
    T: Borrow<EssayInstance>,
{
    let filtered = filter(instances, set);
    if filtered.is_empty() {
        return Err(EmptyInputError { set });
    }
    Ok(filtered)
}
