//! # Sentence Registry
//!
//! [`SentenceFactory`] maps sentence ids to [`SentenceConstructor`]s and builds typed
//! sentences from raw text or from a talker id. A new factory knows every built-in
//! kind in [`sentences`](crate::sentences); custom kinds can be added, built-in ones
//! overridden, and the built-in table restored with
//! [`SentenceFactory::reset_to_defaults`].
//!
//! The factory is an ordinary value. Share one by reference or in an `Arc`; lookups
//! take a read lock and registrations a write lock, so a lookup never sees a
//! half-registered entry.

use std::{
    collections::HashMap,
    fmt,
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use log::debug;

use crate::{
    Error, Result, Sentence, SentenceKind, TalkerId, Validator, sentence_id_of, sentences,
};

type FromText = Arc<dyn Fn(&str) -> Result<Box<dyn Sentence>> + Send + Sync>;
type ForTalker = Arc<dyn Fn(TalkerId) -> Box<dyn Sentence> + Send + Sync>;

/// The two ways of constructing one sentence kind.
///
/// Both must be present for [`SentenceFactory::register`] to accept the constructor.
/// Clones share their closures, so a clone identifies the same constructor in
/// [`SentenceFactory::unregister`].
///
/// # Examples
///
/// ```rust
/// use nmea0183_sentence::{SentenceConstructor, SentenceKind, sentences::GGA};
///
/// let typed = SentenceConstructor::of::<GGA>();
///
/// let by_hand = SentenceConstructor::new()
///     .with_from_text(|raw| Ok(Box::new(GGA::parse(raw)?)))
///     .with_for_talker(|talker| Box::new(GGA::for_talker(talker)));
/// # let _ = (typed, by_hand);
/// ```
#[derive(Clone, Default)]
pub struct SentenceConstructor {
    from_text: Option<FromText>,
    for_talker: Option<ForTalker>,
}

impl SentenceConstructor {
    /// Creates a constructor with neither capability set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the constructor of a [`SentenceKind`].
    pub fn of<T: SentenceKind>() -> Self {
        Self::new()
            .with_from_text(|raw| Ok(Box::new(T::parse(raw)?)))
            .with_for_talker(|talker_id| Box::new(T::for_talker(talker_id)))
    }

    /// Sets the "from raw text" capability.
    pub fn with_from_text<F>(mut self, from_text: F) -> Self
    where
        F: Fn(&str) -> Result<Box<dyn Sentence>> + Send + Sync + 'static,
    {
        self.from_text = Some(Arc::new(from_text));
        self
    }

    /// Sets the "from talker id with blank fields" capability.
    pub fn with_for_talker<F>(mut self, for_talker: F) -> Self
    where
        F: Fn(TalkerId) -> Box<dyn Sentence> + Send + Sync + 'static,
    {
        self.for_talker = Some(Arc::new(for_talker));
        self
    }

    /// Returns `true` if `other` is this constructor or a clone of it.
    pub fn same_as(&self, other: &Self) -> bool {
        fn same<T: ?Sized>(a: &Option<Arc<T>>, b: &Option<Arc<T>>) -> bool {
            match (a, b) {
                (Some(a), Some(b)) => Arc::ptr_eq(a, b),
                (None, None) => true,
                _ => false,
            }
        }

        same(&self.from_text, &other.from_text) && same(&self.for_talker, &other.for_talker)
    }

    fn missing(&self) -> Option<&'static str> {
        match (&self.from_text, &self.for_talker) {
            (None, _) => Some("from-text"),
            (_, None) => Some("for-talker"),
            _ => None,
        }
    }
}

impl fmt::Debug for SentenceConstructor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SentenceConstructor")
            .field("from_text", &self.from_text.is_some())
            .field("for_talker", &self.for_talker.is_some())
            .finish()
    }
}

/// Registry of sentence constructors keyed by sentence id.
///
/// # Examples
///
/// ```rust
/// use nmea0183_sentence::{SentenceFactory, TalkerId, sentences::MTW};
///
/// let factory = SentenceFactory::default();
///
/// let sentence = factory.create_from_text("$IIMTW,17.8,C*1D").unwrap();
/// assert_eq!(sentence.downcast_ref::<MTW>().unwrap().temperature().unwrap(), 17.8);
///
/// let blank = factory.create_for_talker(TalkerId::II, "MTW").unwrap();
/// assert_eq!(blank.to_text(), "$IIMTW,,C*0D");
///
/// assert!(factory.create_from_text("$GPXYZ,1,2").is_err());
/// ```
pub struct SentenceFactory {
    parsers: RwLock<HashMap<String, SentenceConstructor>>,
    validator: Validator,
}

impl SentenceFactory {
    /// Creates a factory that knows the built-in sentence kinds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a factory without any registered sentence kinds.
    pub fn empty() -> Self {
        Self {
            parsers: RwLock::new(HashMap::new()),
            validator: Validator::default(),
        }
    }

    /// Screens raw text with `validator` before dispatching it.
    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.validator = validator;
        self
    }

    /// Registers `constructor` for `sentence_id`, replacing any existing registration.
    ///
    /// Fails with [`Error::Registration`] if the constructor lacks either capability.
    pub fn register(&self, sentence_id: &str, constructor: SentenceConstructor) -> Result<()> {
        if let Some(missing) = constructor.missing() {
            debug!("rejected {sentence_id} registration: no {missing} constructor");
            return Err(Error::Registration {
                id: sentence_id.to_owned(),
                missing,
            });
        }

        let replaced = self
            .write()
            .insert(sentence_id.to_owned(), constructor)
            .is_some();
        debug!("registered {sentence_id} (replaced: {replaced})");
        Ok(())
    }

    /// Registers the constructor of a [`SentenceKind`] under its own sentence id.
    pub fn register_kind<T: SentenceKind>(&self) -> Result<()> {
        self.register(T::SENTENCE_ID, SentenceConstructor::of::<T>())
    }

    /// Removes whichever sentence id `constructor` (or a clone of it) is registered
    /// for, returning that id.
    pub fn unregister(&self, constructor: &SentenceConstructor) -> Option<String> {
        let mut parsers = self.write();
        let sentence_id = parsers
            .iter()
            .find(|(_, registered)| registered.same_as(constructor))
            .map(|(sentence_id, _)| sentence_id.clone())?;

        parsers.remove(&sentence_id);
        debug!("unregistered {sentence_id}");
        Some(sentence_id)
    }

    /// Removes the registration for `sentence_id`.
    pub fn unregister_id(&self, sentence_id: &str) -> Option<SentenceConstructor> {
        let removed = self.write().remove(sentence_id);
        if removed.is_some() {
            debug!("unregistered {sentence_id}");
        }
        removed
    }

    /// Discards every registration and restores the built-in table.
    pub fn reset_to_defaults(&self) {
        let mut parsers = self.write();
        *parsers = builtin_parsers();
        debug!("registry reset to {} built-in parsers", parsers.len());
    }

    /// Returns `true` if a constructor is registered for `sentence_id`.
    pub fn has_parser(&self, sentence_id: &str) -> bool {
        self.read().contains_key(sentence_id)
    }

    /// Returns the registered sentence ids in sorted order.
    pub fn parsers(&self) -> Vec<String> {
        let mut ids: Vec<_> = self.read().keys().cloned().collect();
        ids.sort_unstable();
        ids
    }

    /// Builds a sentence from raw text, choosing the constructor by the text's
    /// sentence id.
    ///
    /// Fails with [`Error::MalformedSentence`] if the text does not pass the factory's
    /// validator, or [`Error::UnsupportedSentence`] if its sentence id is not
    /// registered.
    pub fn create_from_text(&self, raw: &str) -> Result<Box<dyn Sentence>> {
        if !self.validator.is_valid(raw) {
            return Err(Error::MalformedSentence(raw.to_owned()));
        }

        let sentence_id =
            sentence_id_of(raw).ok_or_else(|| Error::MalformedSentence(raw.to_owned()))?;
        let from_text = self
            .lookup(sentence_id)?
            .from_text
            .ok_or_else(|| Error::UnsupportedSentence(sentence_id.to_owned()))?;

        from_text(raw).inspect_err(|err| debug!("{sentence_id} parser failed: {err}"))
    }

    /// Builds a blank sentence of kind `sentence_id` for `talker_id`.
    pub fn create_for_talker(
        &self,
        talker_id: TalkerId,
        sentence_id: &str,
    ) -> Result<Box<dyn Sentence>> {
        let for_talker = self
            .lookup(sentence_id)?
            .for_talker
            .ok_or_else(|| Error::UnsupportedSentence(sentence_id.to_owned()))?;

        Ok(for_talker(talker_id))
    }

    /// Clones the constructor out so that it runs without holding the lock.
    fn lookup(&self, sentence_id: &str) -> Result<SentenceConstructor> {
        self.read().get(sentence_id).cloned().ok_or_else(|| {
            debug!("no parser registered for {sentence_id}");
            Error::UnsupportedSentence(sentence_id.to_owned())
        })
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, SentenceConstructor>> {
        self.parsers.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, SentenceConstructor>> {
        self.parsers.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for SentenceFactory {
    fn default() -> Self {
        Self {
            parsers: RwLock::new(builtin_parsers()),
            validator: Validator::default(),
        }
    }
}

impl fmt::Debug for SentenceFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SentenceFactory")
            .field("parsers", &self.parsers())
            .field("validator", &self.validator)
            .finish()
    }
}

fn builtin_parsers() -> HashMap<String, SentenceConstructor> {
    sentences::builtin()
        .into_iter()
        .map(|(sentence_id, constructor)| (sentence_id.to_owned(), constructor))
        .collect()
}
