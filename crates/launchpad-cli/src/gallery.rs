//! Photo cycler for the detail screen.

/// Steps through a launch's photo URLs, wrapping back to the start.
///
/// `index` is the position of the *next* photo to publish, so after showing
/// the last one it equals the list length until the following call resets
/// it.
#[derive(Debug, Default)]
pub struct PhotoCycler {
  images:  Option<Vec<String>>,
  index:   usize,
  current: Option<String>,
}

impl PhotoCycler {
  pub fn new(images: Option<Vec<String>>) -> Self {
    Self { images, index: 0, current: None }
  }

  pub fn index(&self) -> usize { self.index }

  /// The last published URL. `None` until something has been published.
  pub fn current(&self) -> Option<&str> { self.current.as_deref() }

  pub fn len(&self) -> usize { self.images.as_ref().map_or(0, Vec::len) }

  pub fn is_empty(&self) -> bool { self.len() == 0 }

  /// Publish the next photo. Does nothing for a missing or empty list.
  pub fn advance(&mut self) -> Option<&str> {
    let images = self.images.as_ref().filter(|i| !i.is_empty())?;

    if self.index == images.len() {
      self.index = 0;
    }
    self.current = Some(images[self.index].clone());
    self.index += 1;
    self.current.as_deref()
  }

  /// Publish the first photo unless something is already showing.
  pub fn prime(&mut self) {
    if self.current.is_none() {
      self.advance();
    }
  }
}

#[cfg(test)]
mod tests {
  use launchpad_core::LaunchRecord;

  use super::*;

  #[test]
  fn cycles_and_wraps() {
    let mut g = PhotoCycler::new(LaunchRecord::preview("x").flickr_images);
    assert_eq!(g.index(), 0);

    let expected = [
      "https://live.staticflickr.com/65535/50814482042_476d87b020_o.jpg",
      "https://live.staticflickr.com/65535/50813630408_d98c2215f8_o.jpg",
      "https://live.staticflickr.com/65535/50814379121_8834b5362d_o.jpg",
      "https://live.staticflickr.com/65535/50814379056_f032a23955_o.jpg",
    ];
    for (i, url) in expected.iter().enumerate() {
      assert_eq!(g.advance(), Some(*url));
      assert_eq!(g.current(), Some(*url));
      assert_eq!(g.index(), i + 1);
    }

    // Restarts with the first photo.
    assert_eq!(g.advance(), Some(expected[0]));
    assert_eq!(g.index(), 1);
  }

  #[test]
  fn empty_list_never_publishes() {
    let mut g = PhotoCycler::new(Some(vec![]));
    assert_eq!(g.current(), None);
    assert_eq!(g.advance(), None);
    assert_eq!(g.current(), None);
    assert_eq!(g.index(), 0);
  }

  #[test]
  fn missing_list_never_publishes() {
    let mut g = PhotoCycler::new(None);
    g.prime();
    assert_eq!(g.current(), None);
    assert!(g.is_empty());
  }

  #[test]
  fn prime_only_publishes_once() {
    let mut g = PhotoCycler::new(Some(vec!["a".into(), "b".into()]));
    g.prime();
    g.prime();
    assert_eq!(g.current(), Some("a"));
    assert_eq!(g.index(), 1);
  }
}
