//! Static table of the service categories and the methods each one exposes.

use std::{fmt, str::FromStr};

use crate::common::GigyaError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Service {
    /// Social login, user info and friends.
    Socialize,
    Comments,
    /// Game mechanics.
    Gm,
    /// Cloud storage.
    Gcs,
    Reports,
}

const SOCIALIZE_METHODS: &[&str] = &[
    "checkin",
    "deleteAccount",
    "delUserSettings",
    "getAlbums",
    "getContacts",
    "getFeed",
    "getFriendsInfo",
    "getPhotos",
    "getPlaces",
    "getRawData",
    "getSessionInfo",
    "getUserInfo",
    "getUserSettings",
    "logout",
    "notifyLogin",
    "notifyRegistration",
    "publishUserAction",
    "removeConnection",
    "sendNotification",
    "setStatus",
    "setUID",
    "setUserSettings",
    "shortenURL",
];

const COMMENTS_METHODS: &[&str] = &[
    "flagComment",
    "getComments",
    "getStreamInfo",
    "getTopStreams",
    "postComment",
    "setStreamInfo",
    "vote",
];

const GM_METHODS: &[&str] = &[
    "getChallengeConfig",
    "getChallengeStatus",
    "getTopUsers",
    "notifyAction",
    "redeemPoints",
    "resetLevelStatus",
];

const GCS_METHODS: &[&str] = &[
    "deleteObjectData",
    "deleteUserData",
    "getObjectData",
    "getUserData",
    "search",
    "setObjectData",
    "setUserData",
];

const REPORTS_METHODS: &[&str] = &["getSocializeStats"];

/// Every service with its allowed methods.
pub static SERVICE_METHODS: [(Service, &[&str]); 5] = [
    (Service::Socialize, SOCIALIZE_METHODS),
    (Service::Comments, COMMENTS_METHODS),
    (Service::Gm, GM_METHODS),
    (Service::Gcs, GCS_METHODS),
    (Service::Reports, REPORTS_METHODS),
];

impl Service {
    pub const ALL: [Service; 5] = [
        Service::Socialize,
        Service::Comments,
        Service::Gm,
        Service::Gcs,
        Service::Reports,
    ];

    /// Name used as the host prefix and in the method path.
    pub fn as_str(&self) -> &'static str {
        match self {
            Service::Socialize => "socialize",
            Service::Comments => "comments",
            Service::Gm => "gm",
            Service::Gcs => "gcs",
            Service::Reports => "reports",
        }
    }

    pub fn methods(&self) -> &'static [&'static str] {
        SERVICE_METHODS
            .iter()
            .find(|(service, _)| service == self)
            .map(|(_, methods)| *methods)
            .unwrap_or(&[])
    }

    pub fn supports(&self, method: &str) -> bool {
        self.methods().contains(&method)
    }

    /// Fails with [`GigyaError::UnknownMethod`] for methods outside the table.
    pub fn check(&self, method: &str) -> Result<(), GigyaError> {
        if self.supports(method) {
            Ok(())
        } else {
            Err(GigyaError::UnknownMethod {
                service: self.as_str().to_string(),
                method: method.to_string(),
            })
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Service {
    type Err = GigyaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Service::ALL
            .into_iter()
            .find(|service| service.as_str() == s)
            .ok_or_else(|| GigyaError::InvalidOptions(format!("unknown service: {}", s)))
    }
}
