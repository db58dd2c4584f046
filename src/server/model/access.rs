//! Capability rules for cards and groups.
//!
//! Every permission decision goes through [`authorize`]. Global roles are
//! resolved to [`SystemRole`] once when the [`Actor`] is built; custom roles
//! carry no capabilities. Group rank is the member's [`Position`] in the group
//! being acted on.

use std::collections::HashSet;

use crate::{
    model::{card::CardType, group::Position, role::SystemRole},
    server::model::{card::Card, user::User},
};

/// The authenticated caller of a request.
#[derive(Debug, Clone)]
pub struct Actor {
    pub user: User,
    roles: HashSet<SystemRole>,
}

impl Actor {
    pub fn new(user: User) -> Self {
        let roles = user
            .roles
            .iter()
            .filter_map(|role| SystemRole::from_name(&role.name))
            .collect();

        Self { user, roles }
    }

    pub fn id(&self) -> i32 {
        self.user.id
    }

    pub fn is_admin(&self) -> bool {
        self.user.is_admin
    }

    pub fn has_role(&self, role: SystemRole) -> bool {
        self.roles.contains(&role)
    }

    /// Administrator flag or the Dungeon Master role.
    pub fn is_game_master(&self) -> bool {
        self.is_admin() || self.has_role(SystemRole::DungeonMaster)
    }

    fn owns(&self, card: &Card) -> bool {
        card.user_id == self.user.id
    }
}

/// An operation subject to a capability check.
#[derive(Debug, Clone, Copy)]
pub enum Action<'a> {
    /// List cards of a type. Characters are always listable (own only
    /// unless [`Action::ListAllCharacters`] also passes).
    ListCards(CardType),
    ListAllCharacters,
    ViewCard(&'a Card),
    CreateCard(CardType),
    /// Edit a card or its inventory.
    EditCard(&'a Card),
    DeleteCard(&'a Card),
    ViewItemUsage(&'a Card),
    /// View a group or its ledger; carries the caller's position if a member.
    ViewGroup(Option<Position>),
    /// Update a group, add members, attach or detach cards.
    ManageGroup(Option<Position>),
    CreateGroup,
    DeleteGroup,
    RecordLedgerEntry,
}

/// Returns whether `actor` may perform `action`.
pub fn authorize(actor: &Actor, action: Action<'_>) -> bool {
    match action {
        Action::ListCards(CardType::Character) => true,
        Action::ListCards(_) | Action::ListAllCharacters => actor.is_game_master(),
        Action::ViewCard(card) => {
            actor.owns(card)
                || actor.is_admin()
                || card.is_public
                || game_master_over(actor, card)
        }
        Action::CreateCard(CardType::Character) => true,
        Action::CreateCard(_) => actor.is_game_master() || actor.has_role(SystemRole::CardCreator),
        Action::EditCard(card) | Action::DeleteCard(card) => {
            actor.owns(card) || actor.is_admin() || game_master_over(actor, card)
        }
        Action::ViewItemUsage(item) => actor.owns(item) || actor.is_game_master(),
        Action::ViewGroup(position) => position.is_some() || actor.is_game_master(),
        Action::ManageGroup(position) => {
            actor.is_game_master() || position == Some(Position::Captain)
        }
        Action::CreateGroup | Action::RecordLedgerEntry => actor.is_game_master(),
        Action::DeleteGroup => actor.is_admin(),
    }
}

/// Dungeon Masters control every npc and item card but no one else's character.
fn game_master_over(actor: &Actor, card: &Card) -> bool {
    actor.has_role(SystemRole::DungeonMaster) && card.card_type != CardType::Character
}
