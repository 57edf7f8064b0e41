//! Single-task event loop around [`ViewState`].
//!
//! In-flight effects (position requests, directory fetches) and user input
//! are multiplexed with `tokio::select!` on the current task. Each completion
//! becomes one [`Event`] applied to the state, followed by a render callback.

use std::pin::pin;

use beacon_directory::DirectorySource;
use futures::future::LocalBoxFuture;
use futures::stream::{FuturesUnordered, Stream, StreamExt};
use futures::FutureExt;

use crate::geolocation::{GeolocationProvider, PositionSource};
use crate::state::{Effect, Event, ViewState};

/// Events originating from the search box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserInput {
    QueryChanged(String),
    SearchBoxActivated,
}

impl From<UserInput> for Event {
    fn from(input: UserInput) -> Self {
        match input {
            UserInput::QueryChanged(text) => Event::QueryChanged(text),
            UserInput::SearchBoxActivated => Event::SearchBoxActivated,
        }
    }
}

pub struct ViewRuntime<D, P> {
    directory: D,
    geolocation: GeolocationProvider<P>,
}

impl<D, P> ViewRuntime<D, P>
where
    D: DirectorySource,
    P: PositionSource,
{
    pub fn new(directory: D, geolocation: GeolocationProvider<P>) -> Self {
        Self {
            directory,
            geolocation,
        }
    }

    /// Runs until `input` is exhausted and no effect is in flight, then
    /// returns the final state.
    ///
    /// `render` is called once after init and once after every applied event.
    pub async fn run<I, R>(&self, input: I, mut render: R) -> ViewState
    where
        I: Stream<Item = UserInput>,
        R: FnMut(&ViewState),
    {
        let mut input = pin!(input);
        let mut input_open = true;
        let mut in_flight: FuturesUnordered<LocalBoxFuture<'_, Event>> = FuturesUnordered::new();

        let (mut state, effects) = ViewState::new().apply(Event::Init);
        in_flight.extend(effects.into_iter().map(|effect| self.execute(effect)));
        render(&state);

        loop {
            let event = tokio::select! {
                Some(event) = in_flight.next(), if !in_flight.is_empty() => event,
                next = input.next(), if input_open => match next {
                    Some(user) => Event::from(user),
                    None => {
                        input_open = false;
                        continue;
                    }
                },
                else => break,
            };

            let (next, effects) = state.apply(event);
            state = next;
            in_flight.extend(effects.into_iter().map(|effect| self.execute(effect)));
            render(&state);
        }

        state
    }

    fn execute(&self, effect: Effect) -> LocalBoxFuture<'_, Event> {
        match effect {
            Effect::RequestLocation { seq } => async move {
                let state = self.geolocation.request_location().await;
                Event::LocationResolved { seq, state }
            }
            .boxed_local(),
            Effect::FetchDirectory { seq } => async move {
                match self.directory.fetch_directory().await {
                    Ok(records) => Event::DirectoryLoaded { seq, records },
                    Err(err) => {
                        tracing::warn!(seq, error = %err, "directory fetch failed");
                        Event::DirectoryFailed {
                            seq,
                            message: err.to_string(),
                        }
                    }
                }
            }
            .boxed_local(),
        }
    }
}
