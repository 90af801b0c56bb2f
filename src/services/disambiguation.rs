//! Artist disambiguation.
//!
//! A free-text name query resolves to zero or more candidate artists. The
//! most likely candidate is proposed to the user, who either accepts it or
//! supplies a new query.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::error::Result;
use crate::genius::types::{ArtistCandidate, ArtistRef};
use crate::genius::GeniusClient;

/// Something that can turn a name query into ranked candidate artists.
#[async_trait]
pub trait ArtistSearch: Send + Sync {
    /// Candidates for `query`, most likely first.
    async fn search_artists(&self, query: &str) -> Result<Vec<ArtistCandidate>>;
}

#[async_trait]
impl ArtistSearch for GeniusClient {
    async fn search_artists(&self, query: &str) -> Result<Vec<ArtistCandidate>> {
        Self::search_artists(self, query).await
    }
}

/// The interactive half of disambiguation.
pub trait Confirm {
    /// Ask for a new name query; `None` means the user gave up.
    fn ask_query(&mut self) -> Result<Option<String>>;

    /// Ask whether `candidate` is the intended artist.
    fn confirm(&mut self, candidate: &ArtistCandidate) -> Result<bool>;

    /// Tell the user nothing matched `query`.
    fn notify_no_match(&mut self, query: &str) -> Result<()>;
}

/// Rank the primary artists of a list of search hits.
///
/// Artists credited on more hits rank higher; ties keep the order in which
/// each artist first appeared.
pub fn rank_candidates<'a, I>(artists: I) -> Vec<ArtistCandidate>
where
    I: IntoIterator<Item = &'a ArtistRef>,
{
    let mut index: HashMap<u64, usize> = HashMap::new();
    let mut candidates: Vec<ArtistCandidate> = Vec::new();

    for artist in artists {
        if let Some(&i) = index.get(&artist.id) {
            candidates[i].hits += 1;
        } else {
            index.insert(artist.id, candidates.len());
            candidates.push(ArtistCandidate {
                id: artist.id,
                name: artist.name.clone(),
                hits: 1,
            });
        }
    }

    candidates.sort_by(|a, b| b.hits.cmp(&a.hits));
    candidates
}

/// Resolve a name query to a confirmed artist.
///
/// Returns `Ok(None)` when the user stops supplying queries.
pub async fn resolve_artist<S, C>(
    search: &S,
    confirm: &mut C,
    query: String,
) -> Result<Option<ArtistCandidate>>
where
    S: ArtistSearch + ?Sized,
    C: Confirm + ?Sized,
{
    let mut query = query;

    loop {
        let trimmed = query.trim();
        if !trimmed.is_empty() {
            let candidates = search.search_artists(trimmed).await?;
            match candidates.into_iter().next() {
                Some(top) => {
                    tracing::debug!("Proposing {} ({} hits) for {trimmed:?}", top.name, top.hits);
                    if confirm.confirm(&top)? {
                        return Ok(Some(top));
                    }
                }
                None => confirm.notify_no_match(trimmed)?,
            }
        }

        match confirm.ask_query()? {
            Some(next) => query = next,
            None => return Ok(None),
        }
    }
}
