use soroban_sdk::{contracterror, contracttype, Address, String};

/// On-chain profile backing an artist's soul-bound identity token.
#[contracttype]
#[derive(Clone, Debug)]
pub struct ArtistProfile {
    pub artist: Address,
    pub name: String,
    pub metadata_uri: String,
    pub token_id: u64,
    pub created_at: u64,
}

/// Storage keys for identity data
#[contracttype]
pub enum DataKey {
    Owner,             // Contract owner (may revoke identities)
    NextTokenId,       // Counter for identity token IDs
    Artists,           // Roster of registered artist addresses
    Profile(Address),  // Artist address -> ArtistProfile
    NameOwner(String), // Artist name -> holder address (uniqueness ledger)
    TokenArtist(u64),  // Identity token ID -> artist address
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    NotOwner = 3,
    NameEmpty = 4,
    MetadataUriEmpty = 5,
    ArtistNameExists = 6,
    ArtistAlreadyRegistered = 7,
    ArtistNotRegistered = 8,
    TokenNotFound = 9,
}
