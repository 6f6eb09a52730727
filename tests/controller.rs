mod support;

mod tests {
    use dartled_show::color::BLACK;
    use dartled_show::{
        ColorSlot, ControllerConfig, Duration, EffectId, FastRandom, Rgb, ShowController,
    };

    use super::support::{RecordingSink, ScriptedTransport, ms};

    type Controller = ShowController<RecordingSink, ScriptedTransport, FastRandom, 64>;

    const PLAY: [u8; 3] = [0x01, 0x00, 0x01];

    fn controller(pixel_count: usize) -> Controller {
        ShowController::new(
            RecordingSink::new(pixel_count),
            ScriptedTransport::new(),
            FastRandom::new(2024),
            &ControllerConfig::default(),
        )
    }

    fn mode(value: u8) -> [u8; 3] {
        [0x02, 0x00, value]
    }

    #[test]
    fn test_begin_starts_show() {
        let mut controller = controller(30);
        controller.begin();
        assert!(controller.sink().began);
        assert!(controller.scheduler().has_sequence());
        assert_eq!(controller.sink().last_frame(), Some(&[BLACK; 30][..]));

        assert!(controller.run_once(ms(0)));
        assert!(controller.scheduler().active().is_some());
    }

    #[test]
    fn test_brightness_frame_applies_immediately() {
        let mut controller = controller(30);
        let shown = controller.sink().show_count();
        let mut expected = controller.config().clone();
        expected.set_brightness(0x80);

        controller.transport_mut().push_frame([0x0f, 0x00, 0x80]);
        controller.run_once(ms(0));

        assert_eq!(*controller.config(), expected);
        assert_eq!(controller.scheduler().output_brightness(), 0x80);
        assert_eq!(controller.sink().show_count(), shown + 1);
    }

    #[test]
    fn test_brightness_is_idempotent() {
        let mut controller = controller(8);
        controller.apply([0x0f, 0x00, 0x40]);
        let config = controller.config().clone();
        let frame = controller.sink().last_frame().map(<[Rgb]>::to_vec);

        controller.apply([0x0f, 0x00, 0x40]);
        assert_eq!(*controller.config(), config);
        assert_eq!(controller.sink().last_frame().map(<[Rgb]>::to_vec), frame);
    }

    #[test]
    fn test_mode_then_play_starts_broadway() {
        let mut controller = controller(30);
        controller.transport_mut().push_frame(mode(5));
        controller.transport_mut().push_frame(PLAY);
        controller.run_once(ms(0));

        assert_eq!(
            controller.scheduler().active(),
            Some((EffectId::Broadway, Duration::from_millis(200)))
        );
        assert!(!controller.scheduler().has_sequence());
    }

    #[test]
    fn test_mode_alone_changes_nothing_visible() {
        let mut controller = controller(30);
        controller.apply(mode(4));
        assert_eq!(controller.scheduler().active(), None);

        controller.apply(PLAY);
        assert_eq!(
            controller.scheduler().active(),
            Some((EffectId::Fire, Duration::from_millis(100)))
        );
    }

    #[test]
    fn test_mode_table() {
        let cases = [
            (1, EffectId::Solid(ColorSlot::Accent1), 100),
            (2, EffectId::Flashing, 500),
            (3, EffectId::RunningLights(2), 200),
            (4, EffectId::Fire, 100),
            (5, EffectId::Broadway, 200),
            (8, EffectId::PaletteShow, 10),
            (9, EffectId::RainbowShow, 10),
        ];
        for (value, id, period) in cases {
            let mut controller = controller(30);
            controller.apply(mode(value));
            controller.apply(PLAY);
            assert_eq!(
                controller.scheduler().active(),
                Some((id, Duration::from_millis(period))),
                "mode {value}"
            );
        }
    }

    #[test]
    fn test_indexed_solid_uses_play_argument() {
        let mut controller = controller(4);
        controller.apply(mode(7));
        controller.apply([0x01, 0x05, 0x01]);
        assert_eq!(
            controller.scheduler().active(),
            Some((EffectId::Solid(ColorSlot::Background), Duration::from_millis(100)))
        );

        // Out-of-range index leaves the running effect alone
        controller.apply([0x01, 0x09, 0x01]);
        assert_eq!(
            controller.scheduler().active().map(|(id, _)| id),
            Some(EffectId::Solid(ColorSlot::Background))
        );
    }

    #[test]
    fn test_show_mode_and_direct_play_cancel_each_other() {
        let mut controller = controller(30);
        controller.apply(mode(6));
        controller.apply(PLAY);
        assert!(controller.scheduler().has_sequence());

        controller.apply(mode(2));
        controller.apply(PLAY);
        assert!(!controller.scheduler().has_sequence());

        // The sequence would have fired again by now
        controller.run_once(ms(0));
        controller.run_once(ms(20_000));
        assert_eq!(
            controller.scheduler().active().map(|(id, _)| id),
            Some(EffectId::Flashing)
        );
    }

    #[test]
    fn test_off_and_stop_blank_everything() {
        for frames in [[mode(0), PLAY], [mode(2), [0x01, 0x00, 0x00]]] {
            let mut controller = controller(6);
            controller.begin();
            controller.run_once(ms(0));

            for frame in frames {
                controller.apply(frame);
            }
            assert_eq!(controller.scheduler().active(), None);
            assert!(!controller.scheduler().has_sequence());
            assert_eq!(controller.sink().last_frame(), Some(&[BLACK; 6][..]));
        }
    }

    #[test]
    fn test_unknown_mode_stops() {
        let mut controller = controller(6);
        controller.apply(mode(2));
        controller.apply(PLAY);
        controller.apply(mode(42));
        controller.apply(PLAY);
        assert_eq!(controller.scheduler().active(), None);
        assert_eq!(controller.sink().last_frame(), Some(&[BLACK; 6][..]));
    }

    #[test]
    fn test_play_reset_is_noop() {
        let mut controller = controller(6);
        controller.apply(mode(3));
        controller.apply(PLAY);
        let active = controller.scheduler().active();

        controller.apply([0x01, 0x00, 0x03]);
        assert_eq!(controller.scheduler().active(), active);
    }

    #[test]
    fn test_version_query_replies() {
        let mut controller = controller(4);
        controller.transport_mut().push_frame([0x00, 0x00, 0x00]);
        controller.run_once(ms(0));
        assert_eq!(controller.transport().outgoing, vec![0x00, 0x00, 0xbf]);
    }

    #[test]
    fn test_color_frames_update_config() {
        let mut controller = controller(4);
        controller.transport_mut().push_frame([0x03, 10, 20]);
        controller.transport_mut().push_frame([0x04, 0, 30]);
        controller.run_once(ms(0));
        assert_eq!(
            controller.config().color(ColorSlot::Accent1),
            Rgb::new(10, 20, 30)
        );
    }

    #[test]
    fn test_color_change_shows_on_next_tick() {
        let mut controller = controller(4);
        controller.apply(mode(2));
        controller.apply(PLAY);
        controller.run_once(ms(0));

        controller.apply([0x03, 1, 2]);
        controller.apply([0x04, 0, 3]);
        controller.run_once(ms(500));
        controller.run_once(ms(1_000));
        assert_eq!(controller.scheduler().leds(), &[Rgb::new(1, 2, 3); 4]);
    }

    #[test]
    fn test_select_color() {
        let mut controller = controller(4);
        controller.apply([0x10, 0x00, 0x02]);
        assert_eq!(controller.config().active_slot(), ColorSlot::Accent3);

        controller.apply(mode(5));
        controller.apply(PLAY);
        controller.apply([0x10, 0x00, 0x07]);
        assert_eq!(controller.config().active_slot(), ColorSlot::Accent3);
        assert_eq!(controller.scheduler().active(), None);
        assert_eq!(controller.sink().last_frame(), Some(&[BLACK; 4][..]));
    }

    #[test]
    fn test_select_color_shows_during_sequence() {
        // Find a seed whose first sequence pick draws with the active color
        let mut controller = (0..500)
            .map(|seed| {
                let mut controller: Controller = ShowController::new(
                    RecordingSink::new(8),
                    ScriptedTransport::new(),
                    FastRandom::new(seed),
                    &ControllerConfig::default(),
                );
                controller.begin();
                controller.run_once(ms(0));
                controller
            })
            .find(|controller| {
                matches!(
                    controller.scheduler().active(),
                    Some((EffectId::Flashing | EffectId::Broadway, _))
                )
            })
            .expect("some seed picks flashing or broadway");
        assert!(controller.scheduler().color_override().is_some());

        controller.apply([0x10, 0x00, 0x05]);
        assert_eq!(controller.scheduler().color_override(), None);
        assert!(controller.scheduler().has_sequence());

        let background = controller.config().color(ColorSlot::Background);
        let mut drawn = false;
        for millis in [200, 400] {
            controller.run_once(ms(millis));
            drawn |= controller.scheduler().leds().contains(&background);
        }
        assert!(drawn);
    }

    #[test]
    fn test_partial_frame_waits_for_rest() {
        let mut controller = controller(4);
        controller.transport_mut().push_bytes(&[0x0f, 0x00]);
        controller.run_once(ms(0));
        assert_eq!(controller.config().brightness(), 50);

        controller.transport_mut().push_bytes(&[0x20]);
        controller.run_once(ms(10));
        assert_eq!(controller.config().brightness(), 0x20);
    }

    #[test]
    fn test_unknown_opcode_is_ignored() {
        let mut controller = controller(4);
        let config = controller.config().clone();
        controller.transport_mut().push_frame([0x42, 0x01, 0x02]);
        controller.run_once(ms(0));
        assert_eq!(*controller.config(), config);
        assert_eq!(controller.scheduler().active(), None);
    }

    #[test]
    fn test_frames_apply_in_order() {
        let mut controller = controller(4);
        controller
            .transport_mut()
            .push_bytes(&[0x0f, 0, 10, 0x0f, 0, 20, 0x0f, 0, 30]);
        controller.run_once(ms(0));
        assert_eq!(controller.config().brightness(), 30);
    }

    #[test]
    fn test_connection_is_tracked_without_stopping() {
        let mut controller = controller(4);
        controller.apply(mode(2));
        controller.apply(PLAY);

        controller.transport_mut().connected = true;
        controller.run_once(ms(0));
        assert!(controller.is_connected());

        controller.transport_mut().connected = false;
        controller.run_once(ms(500));
        assert!(!controller.is_connected());
        assert_eq!(
            controller.scheduler().active().map(|(id, _)| id),
            Some(EffectId::Flashing)
        );
    }
}
