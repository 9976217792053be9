/// Type-state machine for the shorten request
///
/// One enum instead of separate `loading`, `error` and `result` signals, so the
/// form can never show an error and a link at the same time.
///
/// # Examples
///
/// ```
/// let mut state = use_signal(|| DataState::<String>::Pending);
///
/// // While the POST is in flight:
/// state.set(DataState::Loading);
///
/// // On success:
/// state.set(DataState::Loaded("http://localhost:3000/abc".to_string()));
///
/// // On failure:
/// state.set(DataState::Error("Failed to shorten URL".to_string()));
/// ```

#[derive(Debug, Clone, PartialEq)]
pub enum DataState<T> {
    /// Nothing submitted yet
    Pending,

    /// Request in flight
    Loading,

    /// Finished with data
    Loaded(T),

    /// Finished with a user-facing error message
    Error(String),
}

impl<T> DataState<T> {
    /// Returns true if state is Pending
    #[cfg(test)]
    pub fn is_pending(&self) -> bool {
        matches!(self, DataState::Pending)
    }

    /// Returns true if state is Loading
    pub fn is_loading(&self) -> bool {
        matches!(self, DataState::Loading)
    }

    /// Returns true if state is Loaded
    #[cfg(test)]
    pub fn is_loaded(&self) -> bool {
        matches!(self, DataState::Loaded(_))
    }

    /// Returns true if state is Error
    #[cfg(test)]
    pub fn is_error(&self) -> bool {
        matches!(self, DataState::Error(_))
    }

    /// Returns the data if loaded, None otherwise
    pub fn data(&self) -> Option<&T> {
        match self {
            DataState::Loaded(data) => Some(data),
            _ => None,
        }
    }

    /// Returns the error message if in error state, None otherwise
    pub fn error(&self) -> Option<&str> {
        match self {
            DataState::Error(msg) => Some(msg),
            _ => None,
        }
    }
}

impl<T> Default for DataState<T> {
    fn default() -> Self {
        DataState::Pending
    }
}
