#![no_std]
use soroban_sdk::{contract, contractimpl, Address, Env, String, Vec};

pub mod identity;
pub mod types;


use identity::IdentityManager;
use types::{ArtistProfile, Error};

/// Soul-bound artist identity registry.
///
/// One identity token per address, minted on registration and burned on
/// revocation. There is deliberately no transfer operation anywhere in this
/// interface: the token cannot change hands.
pub trait ArtistIdentityTrait {
    fn initialize(env: Env, owner: Address) -> Result<(), Error>;
    fn register_artist(
        env: Env,
        artist: Address,
        name: String,
        metadata_uri: String,
    ) -> Result<u64, Error>;
    fn update_profile(
        env: Env,
        artist: Address,
        new_name: String,
        new_metadata_uri: String,
    ) -> Result<(), Error>;
    fn revoke_artist_identity(env: Env, caller: Address, artist: Address) -> Result<(), Error>;

    // Views
    fn is_registered_artist(env: Env, artist: Address) -> bool;
    fn get_artist_profile(env: Env, artist: Address) -> Result<ArtistProfile, Error>;
    fn get_artist_token_id(env: Env, artist: Address) -> Result<u64, Error>;
    fn get_artist_by_token_id(env: Env, token_id: u64) -> Result<Address, Error>;
    fn get_artist_profile_by_token_id(env: Env, token_id: u64) -> Result<ArtistProfile, Error>;
    fn is_artist_name_taken(env: Env, name: String) -> bool;
    fn get_all_artists(env: Env) -> Result<(Vec<Address>, Vec<ArtistProfile>), Error>;
    fn get_total_artists(env: Env) -> u32;
}

#[contract]
pub struct ArtistIdentity;

#[contractimpl]
impl ArtistIdentityTrait for ArtistIdentity {
    fn initialize(env: Env, owner: Address) -> Result<(), Error> {
        IdentityManager::init(&env, &owner)
    }

    fn register_artist(
        env: Env,
        artist: Address,
        name: String,
        metadata_uri: String,
    ) -> Result<u64, Error> {
        IdentityManager::register_artist(&env, &artist, name, metadata_uri)
    }

    fn update_profile(
        env: Env,
        artist: Address,
        new_name: String,
        new_metadata_uri: String,
    ) -> Result<(), Error> {
        IdentityManager::update_profile(&env, &artist, new_name, new_metadata_uri)
    }

    fn revoke_artist_identity(env: Env, caller: Address, artist: Address) -> Result<(), Error> {
        IdentityManager::revoke_artist_identity(&env, &caller, &artist)
    }

    fn is_registered_artist(env: Env, artist: Address) -> bool {
        IdentityManager::is_registered(&env, &artist)
    }

    fn get_artist_profile(env: Env, artist: Address) -> Result<ArtistProfile, Error> {
        IdentityManager::get_profile(&env, &artist)
    }

    fn get_artist_token_id(env: Env, artist: Address) -> Result<u64, Error> {
        IdentityManager::get_token_id(&env, &artist)
    }

    fn get_artist_by_token_id(env: Env, token_id: u64) -> Result<Address, Error> {
        IdentityManager::get_artist_by_token_id(&env, token_id)
    }

    fn get_artist_profile_by_token_id(env: Env, token_id: u64) -> Result<ArtistProfile, Error> {
        IdentityManager::get_profile_by_token_id(&env, token_id)
    }

    fn is_artist_name_taken(env: Env, name: String) -> bool {
        IdentityManager::is_name_taken(&env, &name)
    }

    fn get_all_artists(env: Env) -> Result<(Vec<Address>, Vec<ArtistProfile>), Error> {
        IdentityManager::get_all_artists(&env)
    }

    fn get_total_artists(env: Env) -> u32 {
        IdentityManager::total_artists(&env)
    }
}
