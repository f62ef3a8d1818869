//! Runs the real boot program through the core and checks the machine state at
//! well-known points along the way.

use super::*;
use crate::Cpu;

fn boot_cpu() -> Cpu {
    let _ = env_logger::builder().is_test(true).try_init();
    Cpu::new()
}

#[test]
fn payload_is_in_place() {
    let cpu = boot_cpu();
    assert_eq!(cpu.mmu().read_range(0x0000..=0x00FF), &DMG_BOOT_ROM[..]);
    assert_eq!(cpu.mmu().read_range(LOGO_ADDR..=0x0133), &NINTENDO_LOGO[..]);
    assert_eq!(cpu.regs().pc, 0x0000);
}

#[test]
fn boot_program_carries_its_own_logo_copy() {
    assert_eq!(&DMG_BOOT_ROM[0xA8..0xD8], &NINTENDO_LOGO[..]);
}

#[test]
fn first_step_sets_up_the_stack() {
    let mut cpu = boot_cpu();

    assert_eq!(cpu.step().unwrap(), 3);
    assert_eq!(cpu.regs().pc, 0x0003);
    assert_eq!(cpu.regs().sp, 0xFFFE);
    assert_eq!(cpu.clock().cycles(), 3);
}

#[test]
fn reaches_the_vram_clear_loop() {
    let mut cpu = boot_cpu();

    assert_eq!(cpu.step_until(|r, _| r.pc == 0x0007, 10), Ok(true));
    assert_eq!(cpu.clock().steps(), 3);
    assert_eq!(cpu.clock().cycles(), 7);
    assert_eq!(cpu.regs().hl(), 0x9FFF);
    assert_eq!(cpu.regs().a, 0x00);
    assert!(cpu.regs().flags.zero);
}

#[test]
fn clears_video_ram() {
    let mut cpu = boot_cpu();
    cpu.mmu_mut().read_range_mut(0x5600..=0xAFFE).fill(0xFF);

    assert_eq!(cpu.step_until(|r, _| r.pc == 0x0007, 10), Ok(true));
    let steps_before = cpu.clock().steps();
    let cycles_before = cpu.clock().cycles();

    assert_eq!(cpu.step_until(|r, _| r.hl() == 0x7FFF, 100_000), Ok(true));

    // Three instructions per byte, plus the final store.
    assert_eq!(cpu.clock().steps() - steps_before, (0x9FFF - 0x8000) * 3 + 1);
    assert_eq!(cpu.clock().cycles() - cycles_before, 57_339);
    assert_eq!(cpu.clock().steps(), 24_577);
    assert_eq!(cpu.regs().pc, 0x0008);
    assert_eq!(cpu.regs().af(), 0x0020);

    let mmu = cpu.mmu();
    assert!(mmu.read_range(0x8000..=0x9FFF).iter().all(|&b| b == 0));
    assert_eq!(mmu.read_range(0x7FFE..=0x7FFF), &[0xFF, 0xFF]);
    assert_eq!(mmu.read_range(0xA000..=0xA001), &[0xFF, 0xFF]);
}

#[test]
fn sets_up_audio() {
    let mut cpu = boot_cpu();

    assert_eq!(cpu.step_until(|r, _| r.pc == 0x0014, 100_000), Ok(true));
    assert_eq!(cpu.step_until(|r, _| r.pc == 0x001D, 100), Ok(true));

    let mmu = cpu.mmu();
    assert_eq!(mmu.read_byte(0xFF26), 0x80);
    assert_eq!(mmu.read_byte(0xFF11), 0x80);
    assert_eq!(mmu.read_byte(0xFF12), 0xF3);
    assert_eq!(mmu.read_byte(0xFF25), 0xF3);
    assert_eq!(mmu.read_byte(0xFF24), 0x77);

    let regs = cpu.regs();
    assert_eq!(regs.af(), 0x7700);
    assert_eq!(regs.bc(), 0x0012);
    assert_eq!(regs.hl(), 0xFF24);
    assert_eq!(cpu.clock().steps(), 24_590);
}

#[test]
fn prepares_logo_decompression() {
    let mut cpu = boot_cpu();

    assert_eq!(cpu.step_until(|r, _| r.pc >= 0x001D, 100_000), Ok(true));
    assert_eq!(cpu.step_until(|r, _| r.pc >= 0x0028, 100), Ok(true));

    assert_eq!(cpu.mmu().read_byte(0xFF47), 0xFC);
    let regs = cpu.regs();
    assert_eq!(regs.af(), 0xCE00);
    assert_eq!(regs.bc(), 0x0012);
    assert_eq!(regs.de(), 0x0104);
    assert_eq!(regs.hl(), 0x8010);
    assert_eq!(regs.sp, 0xFFFE);
    assert_eq!(cpu.clock().steps(), 24_595);
}

#[test]
fn decompression_routine_rotates_through_carry() {
    let mut cpu = boot_cpu();

    assert_eq!(cpu.step_until(|r, _| r.pc >= 0x001D, 100_000), Ok(true));
    assert_eq!(cpu.step_until(|r, _| r.pc == 0x00A1, 100), Ok(true));

    let regs = cpu.regs();
    assert_eq!(regs.af(), 0x3B50);
    assert!(!regs.flags.zero);
    assert!(regs.flags.subtract);
    assert!(!regs.flags.half_carry);
    assert!(regs.flags.carry);
    assert_eq!(regs.bc(), 0x039D);
    assert_eq!(regs.de(), 0x0104);
    assert_eq!(regs.hl(), 0x8010);
    assert_eq!(regs.sp, 0xFFFC);
    assert_eq!(cpu.clock().steps(), 24_605);
}

#[test]
fn full_boot_hands_over_to_the_cartridge() {
    let mut cpu = boot_cpu();
    // No PPU: pin LY at the first vblank line and supply a matching header
    // checksum so both waits in the boot program fall through.
    cpu.mmu_mut().write_byte(0xFF44, 0x90);
    cpu.mmu_mut().write_byte(0x014D, 0xE7);

    assert_eq!(
        cpu.step_until(|r, _| r.pc == CARTRIDGE_ENTRY, 1_000_000),
        Ok(true)
    );
    assert_eq!(cpu.clock().steps(), 47_932);
    assert_eq!(cpu.clock().cycles(), 107_617);

    let regs = cpu.regs();
    assert_eq!(regs.af(), 0x01B0);
    assert_eq!(regs.bc(), 0x0013);
    assert_eq!(regs.de(), 0x00D8);
    assert_eq!(regs.hl(), 0x014D);
    assert_eq!(regs.sp, 0xFFFE);
    assert_eq!(cpu.mmu().read_byte(0xFF50), 0x01);
}

#[test]
fn waits_for_vblank_forever_without_ly() {
    let mut cpu = boot_cpu();

    assert_eq!(
        cpu.step_until(|r, _| r.pc == CARTRIDGE_ENTRY, 200_000),
        Ok(false)
    );
    assert!((0x0064..=0x0068).contains(&cpu.regs().pc));
    assert_eq!(cpu.clock().steps(), 200_000);
}
