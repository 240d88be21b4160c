use soroban_sdk::{contractclient, Address};

/// Interface consumed from the artist identity contract. Campaign creation
/// is gated on the caller holding a registered identity.
#[allow(dead_code)]
#[contractclient(name = "IdentityClient")]
pub trait ArtistIdentityInterface {
    /// Returns whether `artist` currently holds an identity token.
    fn is_registered_artist(artist: Address) -> bool;
}
