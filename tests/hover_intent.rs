#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//! Hover-Intent Timer Tests
//!
//! The pill nav closes an open dropdown 150ms after the pointer leaves it.
//! These tests run the controller against tokio's paused clock with the same
//! schedule-and-replace timer the component uses, and check that stale timers
//! never close a dropdown that was re-entered or explicitly reopened.
//!
//! Run with: cargo test --test hover_intent

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use tokio::task::{JoinHandle, LocalSet};
use zypp_web::analytics::Analytics;
use zypp_web::nav::{
    CloseTicket, NavController, NavTree, NoopDocument, StaticRouter, HOVER_CLOSE_DELAY,
};

type Menu = Rc<RefCell<NavController>>;

fn mount() -> Menu {
    Rc::new(RefCell::new(NavController::new(
        NavTree::zypp_default(),
        Analytics::disabled(),
        Rc::new(StaticRouter::new("/")),
        Rc::new(NoopDocument),
    )))
}

/// Spawn the close timer for `ticket`, if any.
fn start_timer(menu: &Menu, ticket: Option<CloseTicket>) -> Option<JoinHandle<()>> {
    let ticket = ticket?;
    let menu = menu.clone();
    Some(tokio::task::spawn_local(async move {
        tokio::time::sleep(HOVER_CLOSE_DELAY).await;
        menu.borrow_mut().expire_close(ticket);
    }))
}

fn is_open(menu: &Menu) -> bool {
    menu.borrow().open_dropdown().is_some()
}

#[tokio::test(start_paused = true)]
async fn test_dropdown_closes_after_delay() {
    LocalSet::new()
        .run_until(async {
            let menu = mount();
            menu.borrow_mut().hover_enter("about-zypp");
            let timer = start_timer(&menu, menu.borrow_mut().hover_leave()).unwrap();

            tokio::time::sleep(HOVER_CLOSE_DELAY - Duration::from_millis(1)).await;
            assert!(is_open(&menu), "closed before the delay elapsed");

            timer.await.unwrap();
            assert!(!is_open(&menu));
            assert_eq!(menu.borrow().pending_close(), None);
        })
        .await;
}

#[tokio::test(start_paused = true)]
async fn test_reentering_trigger_cancels_close() {
    LocalSet::new()
        .run_until(async {
            let menu = mount();
            menu.borrow_mut().hover_enter("about-zypp");
            let timer = start_timer(&menu, menu.borrow_mut().hover_leave()).unwrap();

            tokio::time::sleep(Duration::from_millis(100)).await;
            menu.borrow_mut().hover_enter("about-zypp");
            assert_eq!(menu.borrow().pending_close(), None);

            // The old timer still fires but its ticket is stale
            timer.await.unwrap();
            assert!(is_open(&menu));
        })
        .await;
}

#[tokio::test(start_paused = true)]
async fn test_moving_onto_neighbouring_link_cancels_close() {
    LocalSet::new()
        .run_until(async {
            let menu = mount();
            menu.borrow_mut().hover_enter("about-zypp");
            let first = start_timer(&menu, menu.borrow_mut().hover_leave()).unwrap();

            tokio::time::sleep(Duration::from_millis(100)).await;
            menu.borrow_mut().hover_enter("delivery-partner");
            assert_eq!(menu.borrow().pending_close(), None);

            first.await.unwrap();
            assert!(is_open(&menu), "closed while the pointer was on the nav");

            // Leaving the link starts a fresh delay
            let second = start_timer(&menu, menu.borrow_mut().hover_leave()).unwrap();
            second.await.unwrap();
            assert!(!is_open(&menu));
        })
        .await;
}

#[tokio::test(start_paused = true)]
async fn test_moving_into_panel_cancels_close() {
    LocalSet::new()
        .run_until(async {
            let menu = mount();
            menu.borrow_mut().hover_enter("about-zypp");
            let first = start_timer(&menu, menu.borrow_mut().hover_leave()).unwrap();

            tokio::time::sleep(Duration::from_millis(50)).await;
            menu.borrow_mut().panel_hover_enter();
            tokio::time::sleep(Duration::from_millis(50)).await;
            let second = start_timer(&menu, menu.borrow_mut().panel_hover_leave()).unwrap();

            first.await.unwrap();
            assert!(is_open(&menu), "stale timer closed the dropdown");

            second.await.unwrap();
            assert!(!is_open(&menu));
        })
        .await;
}

#[tokio::test(start_paused = true)]
async fn test_only_latest_ticket_closes() {
    LocalSet::new()
        .run_until(async {
            let menu = mount();
            menu.borrow_mut().hover_enter("about-zypp");
            let first = menu.borrow_mut().hover_leave().unwrap();
            let second = menu.borrow_mut().panel_hover_leave().unwrap();
            assert_ne!(first, second);
            assert_eq!(menu.borrow().pending_close(), Some(second));

            assert!(!menu.borrow_mut().expire_close(first));
            assert!(is_open(&menu));
            assert!(menu.borrow_mut().expire_close(second));
            assert!(!is_open(&menu));
        })
        .await;
}

#[tokio::test(start_paused = true)]
async fn test_explicit_close_beats_pending_timer() {
    LocalSet::new()
        .run_until(async {
            let menu = mount();
            menu.borrow_mut().hover_enter("about-zypp");
            let timer = start_timer(&menu, menu.borrow_mut().hover_leave()).unwrap();

            menu.borrow_mut().outside_pointer_down();
            assert!(!is_open(&menu), "explicit close must not wait for the timer");

            tokio::time::sleep(Duration::from_millis(50)).await;
            menu.borrow_mut().click("about-zypp");

            timer.await.unwrap();
            assert!(is_open(&menu), "stale timer closed a reopened dropdown");
        })
        .await;
}

#[tokio::test(start_paused = true)]
async fn test_leave_without_open_dropdown_schedules_nothing() {
    LocalSet::new()
        .run_until(async {
            let menu = mount();
            menu.borrow_mut().hover_enter("services");
            assert!(start_timer(&menu, menu.borrow_mut().hover_leave()).is_none());
        })
        .await;
}
