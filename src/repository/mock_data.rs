//! 演示用的静态数据表

use crate::types::*;

const AVATAR_1: &str = "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=32&h=32&fit=crop&crop=face";
const AVATAR_2: &str = "https://images.unsplash.com/photo-1494790108755-2616b612b647?w=32&h=32&fit=crop&crop=face";
const AVATAR_3: &str = "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=32&h=32&fit=crop&crop=face";
const AVATAR_4: &str = "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=32&h=32&fit=crop&crop=face";
const AVATAR_5: &str = "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?w=32&h=32&fit=crop&crop=face";
const AVATAR_6: &str = "https://images.unsplash.com/photo-1544005313-94ddf0286df2?w=32&h=32&fit=crop&crop=face";
const AVATAR_7: &str = "https://images.unsplash.com/photo-1570295999919-56ceb5ecca61?w=32&h=32&fit=crop&crop=face";

pub const LOGO_A: &str = "https://images.unsplash.com/photo-1621416894569-0f39ed31d247?w=24&h=24&fit=crop";
pub const LOGO_B: &str = "https://images.unsplash.com/photo-1639762681485-074b7f938ba0?w=24&h=24&fit=crop";
pub const LOGO_C: &str = "https://images.unsplash.com/photo-1639762681057-408e52192e55?w=24&h=24&fit=crop";

const EXPLORER_TX_URL: &str = "https://monadscan.xyz/tx/";

#[allow(clippy::too_many_arguments)]
fn alert(
    id: &str,
    username: &str,
    avatar_url: &str,
    action: AlertAction,
    token_symbol: &str,
    token_logo: &str,
    amount: &str,
    value: &str,
    tx_hash: &str,
    timestamp: &str,
    tx_ref: &str,
) -> TradeAlert {
    TradeAlert {
        id: id.to_string(),
        username: username.to_string(),
        avatar_url: avatar_url.to_string(),
        action,
        token_symbol: token_symbol.to_string(),
        token_logo: token_logo.to_string(),
        amount: amount.to_string(),
        value: value.to_string(),
        tx_hash: tx_hash.to_string(),
        timestamp: timestamp.to_string(),
        dex_url: format!("{}{}", EXPLORER_TX_URL, tx_ref),
    }
}

pub fn trade_alerts() -> Vec<TradeAlert> {
    use AlertAction::*;

    vec![
        alert("1", "vitalik.eth", AVATAR_1, Bought, "MONA", LOGO_A, "10,000", "$2,340", "0x1234...5678", "2m ago", "0x1234567890abcdef"),
        alert("2", "hayden.eth", AVATAR_2, Minted, "DEGEN", LOGO_B, "500", "$125", "0xabcd...efgh", "5m ago", "0xabcdefgh12345678"),
        alert("3", "degen_chad", AVATAR_3, Sold, "PEPE", LOGO_C, "1,000,000", "$4,200", "0x9876...5432", "12m ago", "0x987654321abcdef"),
        alert("4", "crypto_queen", AVATAR_4, Bought, "WOJAK", LOGO_A, "25,000", "$890", "0xfedc...ba98", "18m ago", "0xfedcba9876543210"),
        alert("5", "moonboi", AVATAR_5, Minted, "MOON", LOGO_B, "100", "$1,500", "0x1111...2222", "25m ago", "0x111122223333"),
        alert("6", "nft_collector", AVATAR_6, Bought, "RARE", LOGO_A, "750", "$320", "0x3333...4444", "32m ago", "0x333344445555"),
        alert("7", "whale_alert", AVATAR_7, Sold, "SHIB", LOGO_C, "10,000,000", "$15,600", "0x5555...6666", "45m ago", "0x555566667777"),
        alert("8", "diamond_hands", AVATAR_3, Bought, "DIAMOND", LOGO_A, "50", "$2,800", "0x7777...8888", "1h ago", "0x777788889999"),
        alert("9", "defi_degen", AVATAR_2, Minted, "YIELD", LOGO_B, "200", "$450", "0x9999...aaaa", "1h ago", "0x9999aaaabbbb"),
        alert("10", "smart_money", AVATAR_4, Sold, "SMART", LOGO_C, "5,000", "$1,230", "0xbbbb...cccc", "2h ago", "0xbbbbccccdddd"),
    ]
}

fn watch(id: &str, symbol: &str, name: &str, logo: &str, price: &str, change_24h: f64, volume: &str) -> WatchlistToken {
    WatchlistToken {
        id: id.to_string(),
        symbol: symbol.to_string(),
        name: name.to_string(),
        logo: logo.to_string(),
        price: price.to_string(),
        change_24h,
        volume: volume.to_string(),
    }
}

pub fn watchlist() -> Vec<WatchlistToken> {
    vec![
        watch("1", "MONA", "Monad", LOGO_A, "$0.234", 12.5, "$2.1M"),
        watch("2", "DEGEN", "Degen", LOGO_B, "$0.025", -5.2, "$890K"),
        watch("3", "WOJAK", "Wojak", LOGO_A, "$0.00356", 24.8, "$1.5M"),
        watch("4", "PEPE", "Pepe", LOGO_C, "$0.0000042", -8.1, "$5.2M"),
        watch("5", "MOON", "MoonCoin", LOGO_B, "$15.00", 45.2, "$3.8M"),
    ]
}

pub fn trending_tokens() -> Vec<TrendingToken> {
    let trending = |id: &str, symbol: &str, name: &str, logo: &str, price: &str, change_24h: f64, volume: &str| {
        TrendingToken {
            id: id.to_string(),
            symbol: symbol.to_string(),
            name: name.to_string(),
            logo: logo.to_string(),
            price: price.to_string(),
            change_24h,
            volume: volume.to_string(),
        }
    };

    vec![
        trending("hype", "HYPE", "Hyperliquid", LOGO_B, "$32.45", 156.7, "$2.1M"),
        trending("zerebro", "ZEREBRO", "Zerebro", LOGO_C, "$0.12", 89.3, "$890K"),
        trending("ai16z", "AI16Z", "AI16Z", LOGO_B, "$1.45", 67.8, "$1.5M"),
        trending("virtual", "VIRTUAL", "Virtual", LOGO_C, "$2.78", 45.2, "$3.2M"),
    ]
}

pub fn token_trades() -> Vec<TokenTrade> {
    let trade = |side: TradeSide, amount: &str, usd: &str, timestamp: &str, tx_hash: &str, wallet: &str| TokenTrade {
        side,
        amount: amount.to_string(),
        amount_in_usd: usd.to_string(),
        timestamp: timestamp.to_string(),
        tx_hash: tx_hash.to_string(),
        wallet_address: wallet.to_string(),
    };

    vec![
        trade(TradeSide::Buy, "1,000", "$250", "5m ago", "0xabc...123", "0xdef...456"),
        trade(TradeSide::Sell, "500", "$120", "15m ago", "0xghi...789", "0xjkl...012"),
        trade(TradeSide::Buy, "2,500", "$575", "30m ago", "0xmno...345", "0xpqr...678"),
        trade(TradeSide::Buy, "750", "$165", "1h ago", "0xstu...901", "0xvwx...234"),
        trade(TradeSide::Sell, "1,200", "$288", "2h ago", "0xyzA...567", "0xBCD...890"),
    ]
}

pub fn friend_profiles() -> Vec<FriendProfile> {
    let friend = |id: &str, username: &str, avatar: &str, followers: u64, is_following: bool| FriendProfile {
        id: id.to_string(),
        username: username.to_string(),
        avatar: avatar.to_string(),
        followers,
        is_following,
    };

    vec![
        friend("1", "vitalik.eth", AVATAR_1, 1_200_000, true),
        friend("2", "hayden.eth", AVATAR_3, 45_000, false),
        friend("3", "crypto_queen", AVATAR_4, 23_000, true),
        friend("4", "degen_chad", AVATAR_5, 12_000, false),
        friend("5", "diamond_hands", AVATAR_2, 8_900, true),
        friend("6", "moon_boy", AVATAR_7, 7_500, false),
        friend("7", "nft_collector", AVATAR_6, 6_200, false),
    ]
}

pub fn default_settings() -> NotificationSettings {
    let user = |id: &str, username: &str, avatar: &str, enabled: bool| FollowedUser {
        id: id.to_string(),
        username: username.to_string(),
        avatar: avatar.to_string(),
        enabled,
    };

    NotificationSettings {
        email_notifications: true,
        push_notifications: true,
        trade_alerts: true,
        large_trades_only: false,
        frequency: NotificationFrequency::Instant,
        followed_users: vec![
            user("1", "vitalik.eth", AVATAR_1, true),
            user("2", "hayden.eth", AVATAR_3, true),
            user("3", "crypto_queen", AVATAR_4, false),
            user("4", "degen_chad", AVATAR_5, true),
        ],
    }
}
