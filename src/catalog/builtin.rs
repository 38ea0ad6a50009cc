//! The sample catalog shipped with the crate.
//!
//! This is a representative subset of Google API scopes, not a complete list.

pub(super) const BUILTIN_CATALOG: &[(&str, &[(&str, &str)])] = &[
    (
        "User Information",
        &[
            ("View your email address", "email"),
            ("View your basic profile info", "profile"),
            ("OpenID Connect", "openid"),
        ],
    ),
    (
        "Gmail API",
        &[
            (
                "Read, compose, send, and permanently delete all your email from Gmail",
                "https://www.googleapis.com/auth/gmail.modify",
            ),
            (
                "View your email messages and settings",
                "https://www.googleapis.com/auth/gmail.readonly",
            ),
            (
                "Manage drafts and send emails",
                "https://www.googleapis.com/auth/gmail.compose",
            ),
            (
                "Insert mail into your Gmail mailbox",
                "https://www.googleapis.com/auth/gmail.insert",
            ),
            (
                "View and manage your mail labels",
                "https://www.googleapis.com/auth/gmail.labels",
            ),
        ],
    ),
    (
        "Google Drive API",
        &[
            (
                "See, edit, create, and delete all of your Google Drive files",
                "https://www.googleapis.com/auth/drive",
            ),
            (
                "View and manage metadata of files in your Google Drive",
                "https://www.googleapis.com/auth/drive.metadata",
            ),
            (
                "View and download all your Google Drive files",
                "https://www.googleapis.com/auth/drive.readonly",
            ),
        ],
    ),
    (
        "Google Calendar API",
        &[
            (
                "See, edit, share, and permanently delete all the calendars you can access",
                "https://www.googleapis.com/auth/calendar",
            ),
            (
                "View events on all your calendars",
                "https://www.googleapis.com/auth/calendar.events",
            ),
            (
                "View your calendars",
                "https://www.googleapis.com/auth/calendar.readonly",
            ),
        ],
    ),
    (
        "Google Cloud - Storage",
        &[
            (
                "Manage your data and permissions in Google Cloud Storage",
                "https://www.googleapis.com/auth/devstorage.full_control",
            ),
            (
                "View your data in Google Cloud Storage",
                "https://www.googleapis.com/auth/devstorage.read_only",
            ),
            (
                "Manage your data in Cloud Storage",
                "https://www.googleapis.com/auth/devstorage.read_write",
            ),
        ],
    ),
];
