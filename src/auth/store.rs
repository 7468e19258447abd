// src/auth/store.rs

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use thiserror::Error;

/// ユーザーストアの入出力エラー
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("ユーザーストアの読み書きに失敗しました: {0}")]
    Io(#[from] std::io::Error),
    #[error("ユーザーストアの書式が不正です: {0}")]
    Format(#[from] serde_json::Error),
}

/// JSONファイルに永続化されるユーザー名→パスワードの対応表
///
/// 起動時に一度読み込み、登録のたびに全体を書き戻す。パスワードは
/// 平文のまま比較・保存する（堅牢化はこのシステムの範囲外）。
/// プロセス全体で共有するグローバルにはせず、必要とする側へ参照で渡す。
#[derive(Debug)]
pub struct UserStore {
    path: PathBuf,
    users: BTreeMap<String, String>,
}

impl UserStore {
    /// ユーザーストアの読み込み
    ///
    /// # 引数
    /// - `path`: JSONファイルのパス
    ///
    /// # 戻り値
    /// - ファイルが無い場合は空のストア
    /// - ファイルはあるが読めない・書式が不正な場合はエラー
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let users = if path.exists() {
            let file = File::open(&path)?;
            serde_json::from_reader(BufReader::new(file))?
        } else {
            BTreeMap::new()
        };
        Ok(UserStore { path, users })
    }

    /// 認証の判定
    ///
    /// # 引数
    /// - `username`: ユーザー名
    /// - `password`: パスワード
    ///
    /// # 戻り値
    /// - 登録済みの資格情報と一致する場合は `true`
    pub fn authenticate(&self, username: &str, password: &str) -> bool {
        self.users.get(username).map(String::as_str) == Some(password)
    }

    /// 新規ユーザーの登録
    ///
    /// # 引数
    /// - `username`: ユーザー名
    /// - `password`: パスワード
    ///
    /// # 戻り値
    /// - ユーザー名が既に存在する場合は `false`（ストアは変更しない）
    /// - 登録と永続化に成功した場合は `true`
    pub fn register(&mut self, username: &str, password: &str) -> Result<bool, StoreError> {
        if self.users.contains_key(username) {
            return Ok(false);
        }
        self.users
            .insert(username.to_string(), password.to_string());
        self.save()?;
        Ok(true)
    }

    /// ストア全体をJSONファイルへ書き戻す
    fn save(&self) -> Result<(), StoreError> {
        let file = File::create(&self.path)?;
        serde_json::to_writer(BufWriter::new(file), &self.users)?;
        Ok(())
    }
}
