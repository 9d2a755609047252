//! Property test: unrecognized pairs are rejected and change nothing.

use atrox_motion::command::lookup;
use atrox_motion::{CommandStatus, Execution};
use proptest::prelude::*;

use super::{all_diagnostics, all_snapshots, interpreter, pitch_args};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn unrecognized_pairs_are_rejected(
        address in proptest::char::range('A', 'z'),
        value in any::<i32>(),
    ) {
        prop_assume!(lookup(address, value).is_none());

        let mut interp = interpreter();
        interp.command_init('G', 90);
        interp.execute().unwrap();

        let mode = *interp.controller().mode();
        let diagnostics = all_diagnostics(&interp);
        let snapshots = all_snapshots(&interp);

        prop_assert_eq!(interp.command_init(address, value), CommandStatus::Rejected);
        prop_assert_eq!(interp.execute(), Ok(Execution::Idle));
        interp.load_move_arguments(pitch_args(10.0, 10.0, 10.0));
        prop_assert_eq!(interp.execute(), Ok(Execution::Idle));

        prop_assert_eq!(*interp.controller().mode(), mode);
        prop_assert_eq!(all_diagnostics(&interp), diagnostics);
        prop_assert_eq!(all_snapshots(&interp), snapshots);
    }
}
