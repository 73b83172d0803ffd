// Render loop state machine.

mod common;

use common::ManualHost;
use fx_core::{LoopState, RenderLoop};

#[test]
fn start_is_idempotent() {
    let mut host = ManualHost::new();
    let mut rl = RenderLoop::new();
    assert_eq!(rl.state(), LoopState::Idle);

    assert!(rl.start(&mut host));
    assert!(!rl.start(&mut host));
    assert_eq!(rl.state(), LoopState::Running);
    assert_eq!(host.frames.len(), 1);
}

#[test]
fn each_frame_schedules_exactly_one_successor() {
    let mut host = ManualHost::new();
    let mut rl = RenderLoop::new();
    rl.start(&mut host);

    for _ in 0..5 {
        assert!(host.fire_frame());
        assert!(rl.begin_frame());
        rl.reschedule(&mut host);
        rl.reschedule(&mut host);
        assert_eq!(host.pending_frames(), 1);
    }
    assert_eq!(rl.frames(), 5);
}

#[test]
fn stop_cancels_scheduled_frame_and_is_idempotent() {
    let mut host = ManualHost::new();
    let mut rl = RenderLoop::new();
    rl.start(&mut host);

    assert!(rl.stop(&mut host));
    assert!(!rl.stop(&mut host));
    assert_eq!(rl.state(), LoopState::Idle);
    assert!(host.frames[0].cancelled);
    assert!(!rl.begin_frame());

    // idle loops never reschedule
    rl.reschedule(&mut host);
    assert_eq!(host.pending_frames(), 0);
}

#[test]
fn refused_start_stays_idle() {
    let mut host = ManualHost::new();
    host.refuse_frames = true;
    let mut rl: RenderLoop<u32> = RenderLoop::new();
    assert!(!rl.start(&mut host));
    assert_eq!(rl.state(), LoopState::Idle);
}

#[test]
fn refused_reschedule_goes_idle() {
    let mut host = ManualHost::new();
    let mut rl = RenderLoop::new();
    rl.start(&mut host);
    assert!(host.fire_frame());
    assert!(rl.begin_frame());

    host.refuse_frames = true;
    rl.reschedule(&mut host);
    assert_eq!(rl.state(), LoopState::Idle);

    // and can be started again once the host recovers
    host.refuse_frames = false;
    assert!(rl.start(&mut host));
}
