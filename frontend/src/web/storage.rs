//! LocalStorage 封装模块
//!
//! 使用 `web_sys::Storage` 提供简洁的本地存储接口，并作为会话令牌的持久化介质。

use appsite_admin::TokenStorage;

/// 本地存储操作封装
///
/// 零大小类型，可以随意复制进信号与闭包。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LocalStorage;

impl LocalStorage {
    /// 获取 LocalStorage 实例
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }

    /// 获取存储的字符串值
    ///
    /// 键不存在或发生错误时返回 `None`
    pub fn get(key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    /// 设置存储值，返回操作是否成功
    pub fn set(key: &str, value: &str) -> bool {
        Self::storage()
            .and_then(|s| s.set_item(key, value).ok())
            .is_some()
    }

    /// 删除存储的键值对，返回操作是否成功
    pub fn delete(key: &str) -> bool {
        Self::storage()
            .and_then(|s| s.remove_item(key).ok())
            .is_some()
    }
}

impl TokenStorage for LocalStorage {
    fn load(&self, key: &str) -> Option<String> {
        Self::get(key)
    }

    fn save(&self, key: &str, value: &str) -> bool {
        Self::set(key, value)
    }

    fn remove(&self, key: &str) -> bool {
        Self::delete(key)
    }
}
