use crate::error::{Result, SignalsError};
use crate::types::*;
use tokio::sync::RwLock;

use super::mock_data;

/// 好友目录和通知设置，只存在内存里
pub struct SocialDirectory {
    friends: RwLock<Vec<FriendProfile>>,
    settings: RwLock<NotificationSettings>,
}

impl SocialDirectory {
    pub fn new() -> Self {
        Self {
            friends: RwLock::new(mock_data::friend_profiles()),
            settings: RwLock::new(mock_data::default_settings()),
        }
    }

    /// 空查询返回全部
    pub async fn search_friends(&self, query: Option<&str>) -> Vec<FriendProfile> {
        let friends = self.friends.read().await;
        match query.map(str::trim).filter(|q| !q.is_empty()) {
            Some(q) => {
                let q = q.to_lowercase();
                friends
                    .iter()
                    .filter(|f| f.username.to_lowercase().contains(&q))
                    .cloned()
                    .collect()
            }
            None => friends.clone(),
        }
    }

    pub async fn following_count(&self) -> usize {
        self.friends.read().await.iter().filter(|f| f.is_following).count()
    }

    pub async fn toggle_follow(&self, id: &str) -> Result<FriendProfile> {
        let mut friends = self.friends.write().await;
        let friend = friends
            .iter_mut()
            .find(|f| f.id == id)
            .ok_or_else(|| SignalsError::NotFound(format!("friend {}", id)))?;
        friend.is_following = !friend.is_following;
        Ok(friend.clone())
    }

    pub async fn settings(&self) -> NotificationSettings {
        self.settings.read().await.clone()
    }

    pub async fn replace_settings(&self, settings: NotificationSettings) -> NotificationSettings {
        let mut current = self.settings.write().await;
        *current = settings;
        current.clone()
    }

    pub async fn toggle_followed_user(&self, id: &str) -> Result<FollowedUser> {
        let mut settings = self.settings.write().await;
        let user = settings
            .followed_users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or_else(|| SignalsError::NotFound(format!("followed user {}", id)))?;
        user.enabled = !user.enabled;
        Ok(user.clone())
    }
}

impl Default for SocialDirectory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::{assert_err, assert_ok};

    #[tokio::test]
    async fn test_search_friends() {
        let directory = SocialDirectory::new();
        assert_eq!(directory.search_friends(None).await.len(), 7);
        assert_eq!(directory.search_friends(Some("  ")).await.len(), 7);

        let hits = directory.search_friends(Some("ETH")).await;
        let names: Vec<&str> = hits.iter().map(|f| f.username.as_str()).collect();
        assert_eq!(names, vec!["vitalik.eth", "hayden.eth"]);
    }

    #[tokio::test]
    async fn test_toggle_follow() {
        let directory = SocialDirectory::new();
        assert_eq!(directory.following_count().await, 3);

        let friend = assert_ok!(directory.toggle_follow("2").await);
        assert!(friend.is_following);
        assert_eq!(directory.following_count().await, 4);

        assert_err!(directory.toggle_follow("99").await);
    }

    #[tokio::test]
    async fn test_settings_roundtrip() {
        let directory = SocialDirectory::new();
        let mut settings = directory.settings().await;
        assert_eq!(settings.frequency, NotificationFrequency::Instant);

        settings.large_trades_only = true;
        settings.frequency = NotificationFrequency::Daily;
        directory.replace_settings(settings.clone()).await;
        assert_eq!(directory.settings().await, settings);

        let user = assert_ok!(directory.toggle_followed_user("3").await);
        assert!(user.enabled);
        assert_err!(directory.toggle_followed_user("missing").await);
    }
}
