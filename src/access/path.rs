//! Provide `path` interface for path accessing.

use alloc::boxed::Box;
use alloc::string::String;
use core::convert::Infallible;
use core::fmt;
use core::str::FromStr;

use fastvec::FastVec;

use crate::access::Segment;

// -----------------------------------------------------------------------------
// PathKey

/// An interface where the type implementing this trait can be considered
/// as a "path" for nested lookup.
///
/// A path is an ordered sequence of [`Segment`]s. This crate provides
/// implementations for:
///
/// - `&str` — split on every literal `.`. The empty string is the empty path.
/// - `&[&str]`, `[&str; N]`, `&[String]` — already split; each element is one
///   atomic segment and is never split further.
/// - [`&Path`](Path) — parsed once, reusable.
///
/// # The delimiter rule
///
/// String-form splitting is unconditional and not escape-aware. A key that
/// itself contains a `.` is reachable from the string form only through
/// [`literal_key`]: when the *whole* path string is a key of the root
/// mapping, that entry wins before any splitting happens. Pre-split forms
/// reach such keys through an ordinary single-segment lookup instead.
///
/// [`literal_key`]: PathKey::literal_key
pub trait PathKey<'a> {
    /// Returns the path as an iterator of segments.
    fn to_segments(&self) -> impl Iterator<Item = Segment<'a>>;

    /// Returns the whole path as a single literal key candidate.
    ///
    /// `None` for pre-split forms and for the empty string.
    #[inline]
    fn literal_key(&self) -> Option<&'a str> {
        None
    }
}

impl<'a> PathKey<'a> for &'a str {
    fn to_segments(&self) -> impl Iterator<Item = Segment<'a>> {
        let path: &'a str = *self;
        (!path.is_empty())
            .then(|| path.split('.').map(Segment::borrowed))
            .into_iter()
            .flatten()
    }

    #[inline]
    fn literal_key(&self) -> Option<&'a str> {
        let path: &'a str = *self;
        (!path.is_empty()).then_some(path)
    }
}

impl<'a> PathKey<'a> for &'a [&'a str] {
    fn to_segments(&self) -> impl Iterator<Item = Segment<'a>> {
        let segments: &'a [&'a str] = *self;
        segments.iter().copied().map(Segment::borrowed)
    }
}

impl<'a, const N: usize> PathKey<'a> for [&'a str; N] {
    fn to_segments(&self) -> impl Iterator<Item = Segment<'a>> {
        self.iter().copied().map(Segment::borrowed)
    }
}

impl<'a> PathKey<'a> for &'a [String] {
    fn to_segments(&self) -> impl Iterator<Item = Segment<'a>> {
        let segments: &'a [String] = *self;
        segments.iter().map(|segment| Segment::borrowed(segment))
    }
}

// -----------------------------------------------------------------------------
// Reusable parsed path

/// A reusable pre-parsed path, a thin wrapper over `Box<[Segment]>`.
///
/// String and slice paths are normalized on every resolution. When the same
/// path is resolved against many values, parse it once into a `Path` and
/// reuse it.
///
/// A `Path` parsed from a string keeps the original string form, so the
/// whole-string literal key rule (see [`PathKey`]) still applies. A `Path`
/// collected from segments has no string form and no literal key candidate.
///
/// # Examples
///
/// ```
/// use dotpath::{Path, value};
///
/// let path = Path::parse("settings.volume");
///
/// let a = value!({ "settings": { "volume": 3 } });
/// let b = value!({ "settings": { "volume": 9 } });
///
/// assert_eq!(a.resolve(&path).as_i64(), Some(3));
/// assert_eq!(b.resolve(&path).as_i64(), Some(9));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path {
    /// Original string form, when parsed from one.
    raw: Option<Box<str>>,
    segments: Box<[Segment<'static>]>,
}

impl Path {
    /// Parses a string-form path. Never fails: there is no rejectable syntax.
    pub fn parse(path: &str) -> Self {
        let mut vec: FastVec<Segment<'static>, 8> = FastVec::new();
        let data = vec.get();

        for segment in path.to_segments() {
            data.push(segment.into_owned());
        }

        Self {
            raw: (!path.is_empty()).then(|| Box::from(path)),
            segments: vec.into_boxed_slice(),
        }
    }

    /// Returns the number of segments.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dotpath::Path;
    /// assert_eq!(Path::parse("a.b.c").len(), 3);
    /// assert_eq!(Path::parse("").len(), 0);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns `true` for the empty path, which never resolves.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl<'a> PathKey<'a> for &'a Path {
    fn to_segments(&self) -> impl Iterator<Item = Segment<'a>> {
        let path: &'a Path = *self;
        path.segments
            .iter()
            .map(|segment| Segment::borrowed(segment.as_str()))
    }

    #[inline]
    fn literal_key(&self) -> Option<&'a str> {
        let path: &'a Path = *self;
        path.raw.as_deref()
    }
}

impl From<&str> for Path {
    #[inline]
    fn from(path: &str) -> Self {
        Self::parse(path)
    }
}

impl FromStr for Path {
    type Err = Infallible;

    #[inline]
    fn from_str(path: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(path))
    }
}

/// Builds a pre-split path; elements are atomic and never re-split.
impl<S: AsRef<str>> FromIterator<S> for Path {
    fn from_iter<I: IntoIterator<Item = S>>(segments: I) -> Self {
        Self {
            raw: None,
            segments: segments
                .into_iter()
                .map(|segment| Segment::borrowed(segment.as_ref()).into_owned())
                .collect(),
        }
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            fmt::Display::fmt(segment, f)?;
        }
        Ok(())
    }
}

// -----------------------------------------------------------------------------
// Tests
