//! UI status published by the presentation layer.

use std::sync::Arc;

use crate::Error;

/// One of the five states a screen can be in.
#[derive(Debug, Clone, Default)]
pub enum UiStatus<T> {
  #[default]
  Init,
  Loading,
  Success(T),
  /// The query completed but produced nothing. Not an error.
  Empty,
  Error(Arc<Error>),
}

impl<T> UiStatus<T> {
  pub fn is_loading(&self) -> bool { matches!(self, Self::Loading) }

  pub fn data(&self) -> Option<&T> {
    match self {
      Self::Success(data) => Some(data),
      _ => None,
    }
  }

  pub fn error(e: Error) -> Self { Self::Error(Arc::new(e)) }
}

impl<T> UiStatus<Vec<T>> {
  pub fn from_list(items: Vec<T>) -> Self {
    if items.is_empty() {
      Self::Empty
    } else {
      Self::Success(items)
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn empty_list_is_empty_status() {
    assert!(matches!(UiStatus::<Vec<u8>>::from_list(vec![]), UiStatus::Empty));
    let s = UiStatus::from_list(vec![1, 2]);
    assert_eq!(s.data(), Some(&vec![1, 2]));
  }
}
