mod support;

mod tests {
    use dartled_show::command::version_reply;
    use dartled_show::{ColorSlot, Command, CommandDecoder, PlayAction};

    use super::support::ScriptedTransport;

    #[test]
    fn test_decode_version_query() {
        assert_eq!(Command::decode([0x00, 0, 0]), Some(Command::QueryVersion));
    }

    #[test]
    fn test_decode_play_actions() {
        assert_eq!(
            Command::decode([0x01, 4, 1]),
            Some(Command::Play {
                action: PlayAction::Play,
                arg: 4
            })
        );
        assert_eq!(
            Command::decode([0x01, 0, 0]),
            Some(Command::Play {
                action: PlayAction::Stop,
                arg: 0
            })
        );
        assert_eq!(
            Command::decode([0x01, 0, 3]),
            Some(Command::Play {
                action: PlayAction::Reset,
                arg: 0
            })
        );
        assert_eq!(Command::decode([0x01, 0, 2]), None);
    }

    #[test]
    fn test_decode_color_channels() {
        assert_eq!(
            Command::decode([0x03, 10, 20]),
            Some(Command::SetRedGreen {
                slot: ColorSlot::Accent1,
                r: 10,
                g: 20
            })
        );
        assert_eq!(
            Command::decode([0x0a, 99, 30]),
            Some(Command::SetBlue {
                slot: ColorSlot::Accent4,
                b: 30
            })
        );
        assert_eq!(
            Command::decode([0x0d, 1, 2]),
            Some(Command::SetRedGreen {
                slot: ColorSlot::Background,
                r: 1,
                g: 2
            })
        );
        assert_eq!(
            Command::decode([0x0e, 0, 3]),
            Some(Command::SetBlue {
                slot: ColorSlot::Background,
                b: 3
            })
        );
    }

    #[test]
    fn test_decode_settings() {
        assert_eq!(Command::decode([0x02, 0, 5]), Some(Command::SetMode(5)));
        assert_eq!(
            Command::decode([0x0f, 0, 0x80]),
            Some(Command::SetBrightness(0x80))
        );
        assert_eq!(Command::decode([0x10, 0, 2]), Some(Command::SelectColor(2)));
    }

    #[test]
    fn test_decode_unknown_opcode() {
        assert_eq!(Command::decode([0x11, 0, 0]), None);
        assert_eq!(Command::decode([0xff, 1, 2]), None);
    }

    #[test]
    fn test_version_reply() {
        assert_eq!(version_reply(191), [0x00, 0x00, 0xbf]);
        assert_eq!(version_reply(0x0102), [0x00, 0x01, 0x02]);
    }

    #[test]
    fn test_decoder_holds_partial_frame() {
        let mut transport = ScriptedTransport::new();
        let mut decoder = CommandDecoder::new();

        transport.push_bytes(&[0x0f, 0x00]);
        assert_eq!(decoder.next_frame(&mut transport), None);
        assert_eq!(decoder.pending_len(), 2);

        transport.push_bytes(&[0x80]);
        assert_eq!(decoder.next_frame(&mut transport), Some([0x0f, 0x00, 0x80]));
        assert_eq!(decoder.pending_len(), 0);
    }

    #[test]
    fn test_decoder_splits_back_to_back_frames() {
        let mut transport = ScriptedTransport::new();
        let mut decoder = CommandDecoder::new();

        transport.push_bytes(&[0x02, 0, 5, 0x01, 0, 1, 0x10]);
        assert_eq!(decoder.next_frame(&mut transport), Some([0x02, 0, 5]));
        assert_eq!(decoder.next_frame(&mut transport), Some([0x01, 0, 1]));
        assert_eq!(decoder.next_frame(&mut transport), None);
        assert_eq!(decoder.pending_len(), 1);
        assert!(transport.incoming.is_empty());
    }
}
