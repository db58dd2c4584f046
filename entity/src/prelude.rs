pub use super::campaign_group::Entity as CampaignGroup;
pub use super::card::Entity as Card;
pub use super::card_item::Entity as CardItem;
pub use super::card_relation::Entity as CardRelation;
pub use super::field::Entity as Field;
pub use super::group_bank_entry::Entity as GroupBankEntry;
pub use super::group_card::Entity as GroupCard;
pub use super::group_member::Entity as GroupMember;
pub use super::role::Entity as Role;
pub use super::user::Entity as User;
pub use super::user_role::Entity as UserRole;
