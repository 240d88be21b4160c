use crate::types::{ArtistProfile, DataKey, Error};
use soroban_sdk::{Address, Env, String, Symbol, Vec};

pub struct IdentityManager;

impl IdentityManager {
    /// One-time setup of the contract owner (the only party allowed to revoke).
    pub fn init(env: &Env, owner: &Address) -> Result<(), Error> {
        if env.storage().instance().has(&DataKey::Owner) {
            return Err(Error::AlreadyInitialized);
        }
        owner.require_auth();

        env.storage().instance().set(&DataKey::Owner, owner);
        env.storage().instance().set(&DataKey::NextTokenId, &1u64);
        Ok(())
    }

    /// Register a new artist and mint their identity token.
    ///
    /// The token is soul-bound by construction: ownership lives in the
    /// `TokenArtist` relation and no transfer entry point exists.
    pub fn register_artist(
        env: &Env,
        artist: &Address,
        name: String,
        metadata_uri: String,
    ) -> Result<u64, Error> {
        artist.require_auth();

        if name.is_empty() {
            return Err(Error::NameEmpty);
        }
        if metadata_uri.is_empty() {
            return Err(Error::MetadataUriEmpty);
        }
        if env.storage().persistent().has(&DataKey::Profile(artist.clone())) {
            return Err(Error::ArtistAlreadyRegistered);
        }
        if env.storage().persistent().has(&DataKey::NameOwner(name.clone())) {
            return Err(Error::ArtistNameExists);
        }

        let token_id: u64 = env
            .storage()
            .instance()
            .get(&DataKey::NextTokenId)
            .ok_or(Error::NotInitialized)?;
        env.storage()
            .instance()
            .set(&DataKey::NextTokenId, &(token_id + 1));

        let profile = ArtistProfile {
            artist: artist.clone(),
            name: name.clone(),
            metadata_uri,
            token_id,
            created_at: env.ledger().timestamp(),
        };

        env.storage()
            .persistent()
            .set(&DataKey::Profile(artist.clone()), &profile);
        env.storage()
            .persistent()
            .set(&DataKey::NameOwner(name), artist);
        env.storage()
            .persistent()
            .set(&DataKey::TokenArtist(token_id), artist);

        let mut roster = Self::roster(env);
        roster.push_back(artist.clone());
        env.storage().instance().set(&DataKey::Artists, &roster);

        env.events().publish(
            (Symbol::new(env, "ArtistRegistered"), artist.clone()),
            token_id,
        );

        Ok(token_id)
    }

    /// Rename and/or repoint the metadata of an existing profile.
    /// The old name is freed first, so renaming to the same name is allowed.
    pub fn update_profile(
        env: &Env,
        artist: &Address,
        new_name: String,
        new_metadata_uri: String,
    ) -> Result<(), Error> {
        artist.require_auth();

        if new_name.is_empty() {
            return Err(Error::NameEmpty);
        }
        if new_metadata_uri.is_empty() {
            return Err(Error::MetadataUriEmpty);
        }

        let mut profile = Self::get_profile(env, artist)?;

        env.storage()
            .persistent()
            .remove(&DataKey::NameOwner(profile.name.clone()));
        if env
            .storage()
            .persistent()
            .has(&DataKey::NameOwner(new_name.clone()))
        {
            // Another artist holds the new name; restore the old claim.
            env.storage()
                .persistent()
                .set(&DataKey::NameOwner(profile.name.clone()), artist);
            return Err(Error::ArtistNameExists);
        }
        env.storage()
            .persistent()
            .set(&DataKey::NameOwner(new_name.clone()), artist);

        profile.name = new_name;
        profile.metadata_uri = new_metadata_uri;
        env.storage()
            .persistent()
            .set(&DataKey::Profile(artist.clone()), &profile);

        env.events().publish(
            (Symbol::new(env, "ProfileUpdated"), artist.clone()),
            profile.token_id,
        );

        Ok(())
    }

    /// Owner-only: burn an artist's identity token and free their name.
    pub fn revoke_artist_identity(env: &Env, caller: &Address, artist: &Address) -> Result<(), Error> {
        caller.require_auth();

        let owner: Address = env
            .storage()
            .instance()
            .get(&DataKey::Owner)
            .ok_or(Error::NotInitialized)?;
        if *caller != owner {
            return Err(Error::NotOwner);
        }

        let profile = Self::get_profile(env, artist)?;

        env.storage()
            .persistent()
            .remove(&DataKey::Profile(artist.clone()));
        env.storage()
            .persistent()
            .remove(&DataKey::NameOwner(profile.name));
        env.storage()
            .persistent()
            .remove(&DataKey::TokenArtist(profile.token_id));

        let mut roster = Self::roster(env);
        if let Some(index) = roster.first_index_of(artist) {
            roster.remove(index);
            env.storage().instance().set(&DataKey::Artists, &roster);
        }

        env.events().publish(
            (Symbol::new(env, "IdentityRevoked"), artist.clone()),
            profile.token_id,
        );

        Ok(())
    }

    pub fn is_registered(env: &Env, artist: &Address) -> bool {
        env.storage().persistent().has(&DataKey::Profile(artist.clone()))
    }

    pub fn get_profile(env: &Env, artist: &Address) -> Result<ArtistProfile, Error> {
        env.storage()
            .persistent()
            .get(&DataKey::Profile(artist.clone()))
            .ok_or(Error::ArtistNotRegistered)
    }

    pub fn get_token_id(env: &Env, artist: &Address) -> Result<u64, Error> {
        Ok(Self::get_profile(env, artist)?.token_id)
    }

    pub fn get_artist_by_token_id(env: &Env, token_id: u64) -> Result<Address, Error> {
        env.storage()
            .persistent()
            .get(&DataKey::TokenArtist(token_id))
            .ok_or(Error::TokenNotFound)
    }

    pub fn get_profile_by_token_id(env: &Env, token_id: u64) -> Result<ArtistProfile, Error> {
        let artist = Self::get_artist_by_token_id(env, token_id)?;
        Self::get_profile(env, &artist)
    }

    pub fn is_name_taken(env: &Env, name: &String) -> bool {
        env.storage().persistent().has(&DataKey::NameOwner(name.clone()))
    }

    pub fn get_all_artists(env: &Env) -> Result<(Vec<Address>, Vec<ArtistProfile>), Error> {
        let roster = Self::roster(env);
        let mut profiles = Vec::new(env);
        for artist in roster.iter() {
            profiles.push_back(Self::get_profile(env, &artist)?);
        }
        Ok((roster, profiles))
    }

    pub fn total_artists(env: &Env) -> u32 {
        Self::roster(env).len()
    }

    fn roster(env: &Env) -> Vec<Address> {
        env.storage()
            .instance()
            .get(&DataKey::Artists)
            .unwrap_or_else(|| Vec::new(env))
    }
}
