//! Dataset decoding and query resolution.
//!
//! Every operation here is stateless and side-effect-free: it loads the
//! raw dataset bytes, decodes the full record sequence eagerly, then
//! performs an ordered linear scan or filter. Nothing is cached between
//! calls and nothing is ever written back.
//!
//! Lookups deliberately use an ordered scan rather than a keyed map:
//! the dataset files do not guarantee unique ids, and the contract is
//! that the first record in file order wins.

use serde::de::DeserializeOwned;

use crate::model::{
    CommentList, Party, PartyList, PartyWithMembers, Politician, PoliticianList,
};
use crate::store::{DataStore, Dataset, StoreError};

/// Error from resolving a query, with variants that map cleanly to
/// HTTP status codes.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    /// The caller supplied an empty identifier. Rejected before any
    /// I/O happens.
    #[error("identifier must not be empty")]
    EmptyId,

    /// No record in the dataset carries the requested id.
    #[error("no {dataset} record with id '{id}'")]
    NotFound { dataset: Dataset, id: String },

    /// The dataset file could not be read.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The dataset bytes did not conform to the expected shape.
    #[error("failed to decode {dataset} dataset: {source}")]
    Decode {
        dataset: Dataset,
        #[source]
        source: serde_json::Error,
    },
}

/// Load a dataset and decode it into `T`, materializing the whole
/// sequence before any query logic runs.
async fn load<T: DeserializeOwned>(
    store: &dyn DataStore,
    dataset: Dataset,
) -> Result<T, QueryError> {
    let bytes = store.read(dataset).await?;
    serde_json::from_slice(&bytes).map_err(|source| QueryError::Decode { dataset, source })
}

/// Find the first record in file order matching `id`.
///
/// First occurrence wins on duplicate ids; the files do not enforce
/// uniqueness.
fn find_by_id<T>(
    records: Vec<T>,
    dataset: Dataset,
    id: &str,
    record_id: impl Fn(&T) -> &str,
) -> Result<T, QueryError> {
    records
        .into_iter()
        .find(|record| record_id(record) == id)
        .ok_or_else(|| QueryError::NotFound {
            dataset,
            id: id.to_string(),
        })
}

/// List every politician, in file order.
///
/// # Errors
///
/// Returns [`QueryError::Store`] or [`QueryError::Decode`] if the
/// dataset cannot be read or parsed.
pub async fn list_politicians(store: &dyn DataStore) -> Result<PoliticianList, QueryError> {
    let politicians: Vec<Politician> = load(store, Dataset::Politicians).await?;
    Ok(PoliticianList { politicians })
}

/// Look up a single politician by id.
///
/// # Errors
///
/// Returns [`QueryError::EmptyId`] for an empty id (checked before any
/// I/O), [`QueryError::NotFound`] if no record matches, and the usual
/// load/decode failures otherwise.
pub async fn get_politician(store: &dyn DataStore, id: &str) -> Result<Politician, QueryError> {
    if id.is_empty() {
        return Err(QueryError::EmptyId);
    }
    let politicians: Vec<Politician> = load(store, Dataset::Politicians).await?;
    find_by_id(politicians, Dataset::Politicians, id, |p| p.id.as_str())
}

/// List every party, in file order.
///
/// # Errors
///
/// Returns [`QueryError::Store`] or [`QueryError::Decode`] if the
/// dataset cannot be read or parsed.
pub async fn list_parties(store: &dyn DataStore) -> Result<PartyList, QueryError> {
    let parties: Vec<Party> = load(store, Dataset::Parties).await?;
    Ok(PartyList { parties })
}

/// Look up a single party by id.
///
/// # Errors
///
/// Same taxonomy as [`get_politician`], over the parties dataset.
pub async fn get_party(store: &dyn DataStore, id: &str) -> Result<Party, QueryError> {
    if id.is_empty() {
        return Err(QueryError::EmptyId);
    }
    let parties: Vec<Party> = load(store, Dataset::Parties).await?;
    find_by_id(parties, Dataset::Parties, id, |p| p.id.as_str())
}

/// Look up a party and the politicians belonging to it.
///
/// The party is resolved first; any failure there aborts the request
/// without touching the politicians dataset. Membership is determined
/// by each politician's *embedded* party snapshot, not by a live join,
/// so a stale snapshot yields a stale member list. An empty member
/// list is a successful result.
///
/// # Errors
///
/// Same taxonomy as [`get_party`], plus load/decode failures from the
/// politicians dataset.
pub async fn get_party_with_members(
    store: &dyn DataStore,
    id: &str,
) -> Result<PartyWithMembers, QueryError> {
    let party = get_party(store, id).await?;

    let politicians: Vec<Politician> = load(store, Dataset::Politicians).await?;
    let members = politicians
        .into_iter()
        .filter(|politician| politician.party.id == id)
        .collect();

    Ok(PartyWithMembers { party, members })
}

/// Return the full comment collection, parents and replies interleaved
/// exactly as stored.
///
/// # Errors
///
/// Returns [`QueryError::Store`] or [`QueryError::Decode`] if the
/// dataset cannot be read or parsed.
pub async fn get_comments(store: &dyn DataStore) -> Result<CommentList, QueryError> {
    load::<CommentList>(store, Dataset::Comments).await
}
