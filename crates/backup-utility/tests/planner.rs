//! Tests for the backup decision.
//!
#![allow(missing_docs)]

use std::fs;

use backup_utility::{
    BackupEntry, ServerEntry, scan_backups, scan_servers, servers_to_backup,
};
use chrono::DateTime;

mod common;

fn server(name: &str, seconds: i64) -> ServerEntry {
    ServerEntry {
        name: name.to_owned(),
        path: name.into(),
        last_modified: common::utc_seconds(seconds),
    }
}

fn backup_entry(name: &str, seconds: i64) -> BackupEntry {
    BackupEntry {
        server_name: name.to_owned(),
        path: name.into(),
        latest_archive: common::utc_seconds(seconds),
    }
}

fn selected_names<'servers>(
    servers: &'servers [ServerEntry],
    backups: &[BackupEntry],
) -> Vec<&'servers str> {
    servers_to_backup(servers, backups)
        .iter()
        .map(|server| server.name.as_str())
        .collect()
}

#[test]
fn server_newer_than_its_archive_is_selected() {
    // Changed at second 1000, newest archive embeds second 999.
    let servers = [server("alpha", 1_000)];
    let backups = [backup_entry("alpha", 999)];

    assert_eq!(selected_names(&servers, &backups), ["alpha"]);
}

#[test]
fn equal_timestamps_are_not_selected() {
    let servers = [server("beta", 500)];
    let backups = [backup_entry("beta", 500)];

    assert!(selected_names(&servers, &backups).is_empty());
}

#[test]
fn one_second_newer_is_selected() {
    let servers = [server("beta", 501)];
    let backups = [backup_entry("beta", 500)];

    assert_eq!(selected_names(&servers, &backups), ["beta"]);
}

#[test]
fn bootstrap_selects_every_server() {
    // No backup folders at all: even a server that never changed since the
    // epoch is selected.
    let servers = [server("alpha", 0), server("beta", 1_000)];

    assert_eq!(selected_names(&servers, &[]), ["alpha", "beta"]);
}

#[test]
fn server_without_a_matching_backup_folder_is_selected() {
    let servers = [server("alpha", 1_000)];
    let backups = [backup_entry("other", 2_000)];

    assert_eq!(selected_names(&servers, &backups), ["alpha"]);
}

#[test]
fn selection_order_follows_the_server_list() {
    let servers = [server("carol", 10), server("alice", 10), server("bob", 10)];
    let backups = [backup_entry("carol", 1), backup_entry("bob", 1)];

    assert_eq!(selected_names(&servers, &backups), ["carol", "alice", "bob"]);
}

#[test]
fn scan_servers_rounds_modification_times() {
    let root = tempfile::tempdir().unwrap();
    let folder = root.path().join("alpha");
    fs::create_dir(&folder).unwrap();
    common::write_file_modified_at_millis(&folder.join("world.dat"), 1_495_407_727_034);
    common::set_modified_millis(&folder, 1_495_407_727_034);

    let servers = scan_servers(vec![folder]).unwrap();
    let entry = servers.first().unwrap();

    assert_eq!(entry.name, "alpha");
    assert_eq!(entry.last_modified.timestamp_millis(), 1_495_407_727_000);
}

#[test]
fn scan_backups_reads_the_newest_archive_name() {
    let backups_root = tempfile::tempdir().unwrap();
    let folder = backups_root.path().join("alpha");
    fs::create_dir(&folder).unwrap();
    fs::write(folder.join("alpha_1970-01-01_00-16-39.zip"), "a").unwrap();

    let backups = scan_backups(backups_root.path()).unwrap();
    let entry = backups.first().unwrap();

    assert_eq!(entry.server_name, "alpha");
    assert_eq!(entry.latest_archive.timestamp(), 999);
}

#[test]
fn scan_backups_treats_an_empty_folder_as_the_epoch() {
    let backups_root = tempfile::tempdir().unwrap();
    fs::create_dir(backups_root.path().join("alpha")).unwrap();

    let backups = scan_backups(backups_root.path()).unwrap();
    let entry = backups.first().unwrap();

    assert_eq!(entry.latest_archive, DateTime::UNIX_EPOCH);
}

#[test]
fn empty_backup_folder_forces_a_backup() {
    let backups_root = tempfile::tempdir().unwrap();
    fs::create_dir(backups_root.path().join("alpha")).unwrap();

    let servers = [server("alpha", 1)];
    let backups = scan_backups(backups_root.path()).unwrap();

    assert_eq!(selected_names(&servers, &backups), ["alpha"]);
}
