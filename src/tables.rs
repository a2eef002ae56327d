//! Symbol tables mapping Forge names to Fabric names.
//!
//! The built-in catalogues cover the symbols used by the Minescript mod sources.
//! Table order matters: rules are compiled in the order pairs appear here.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{error::Error, types::NamePair};

/// Fully-qualified class names, Forge first.
pub const CLASS_NAME_PAIRS: &[(&str, &str)] = &[
    ("com.mojang.blaze3d.platform.InputConstants", "net.minecraft.client.util.InputUtil"),
    ("net.minecraft.client.KeyMapping", "net.minecraft.client.option.KeyBinding"),
    ("net.minecraft.client.Minecraft", "net.minecraft.client.MinecraftClient"),
    ("net.minecraft.client.Screenshot", "net.minecraft.client.util.ScreenshotRecorder"),
    (
        "net.minecraft.client.gui.components.EditBox",
        "net.minecraft.client.gui.widget.TextFieldWidget",
    ),
    ("net.minecraft.client.gui.screens.ChatScreen", "net.minecraft.client.gui.screen.ChatScreen"),
    (
        "net.minecraft.client.gui.screens.LevelLoadingScreen",
        "net.minecraft.client.gui.screen.world.LevelLoadingScreen",
    ),
    (
        "net.minecraft.client.gui.screens.ReceivingLevelScreen",
        "net.minecraft.client.gui.screen.ProgressScreen",
    ),
    ("net.minecraft.client.gui.screens.Screen", "net.minecraft.client.gui.screen.Screen"),
    (
        "net.minecraft.client.gui.screens.inventory.CreativeModeInventoryScreen",
        "net.minecraft.client.gui.screen.ingame.CreativeInventoryScreen",
    ),
    ("net.minecraft.client.player.LocalPlayer", "net.minecraft.client.network.ClientPlayerEntity"),
    ("net.minecraft.core.BlockPos", "net.minecraft.util.math.BlockPos"),
    ("net.minecraft.nbt.CompoundTag", "net.minecraft.nbt.NbtCompound"),
    ("net.minecraft.network.chat.Component.Serializer", "net.minecraft.text.Text.Serialization"),
    ("net.minecraft.network.chat.Component", "net.minecraft.text.Text"),
    (
        "net.minecraft.network.protocol.game.ServerboundPickItemPacket",
        "net.minecraft.network.packet.c2s.play.PickFromInventoryC2SPacket",
    ),
    ("net.minecraft.world.entity.Entity", "net.minecraft.entity.Entity"),
    ("net.minecraft.world.entity.LivingEntity", "net.minecraft.entity.LivingEntity"),
    ("net.minecraft.world.item.ItemStack", "net.minecraft.item.ItemStack"),
    ("net.minecraft.world.level.Level", "net.minecraft.world.World"),
    ("net.minecraft.world.level.LevelAccessor", "net.minecraft.world.WorldAccess"),
    ("net.minecraft.world.level.block.state.BlockState", "net.minecraft.block.BlockState"),
    ("net.minecraft.world.level.chunk.ChunkAccess", "net.minecraft.world.chunk.Chunk"),
    ("net.minecraft.world.level.chunk.ChunkSource", "net.minecraft.world.chunk.ChunkManager"),
    ("net.minecraft.world.phys.BlockHitResult", "net.minecraft.util.hit.BlockHitResult"),
    ("net.minecraft.world.phys.HitResult", "net.minecraft.util.hit.HitResult"),
];

/// Member, field and local identifier names, Forge first.
pub const MEMBER_NAME_PAIRS: &[(&str, &str)] = &[
    ("\"f_95573_\"", "\"field_2382\""),
    ("\"input\"", "\"chatField\""),
    ("BlockPos.MutableBlockPos", "BlockPos.Mutable"),
    ("Component.nullToEmpty", "Text.of"),
    ("KEYSYM.getOrCreate", "KEYSYM.createFromCode"),
    ("KeyMapping.click", "KeyBinding.onKeyPressed"),
    ("KeyMapping.set", "KeyBinding.setKeyPressed"),
    ("MOUSE.getOrCreate", "MOUSE.createFromCode"),
    ("Screenshot.grab", "ScreenshotRecorder.saveScreenshot"),
    ("chatEditBox.getCursorPosition", "chatEditBox.getCursor"),
    ("chatEditBox.getValue", "chatEditBox.getText"),
    ("chatEditBox.insertText", "chatEditBox.write"),
    ("chatEditBox.setCursorPosition", "chatEditBox.setSelectionStart"),
    ("chatEditBox.setTextColor", "chatEditBox.setEditableColor"),
    ("chatEditBox.setValue", "chatEditBox.setText"),
    ("chatHud.addRecentChat", "chatHud.addToMessageHistory"),
    ("chunkManager.getChunkNow", "chunkManager.getWorldChunk"),
    ("chunkPos.getBlockAt", "chunkPos.getBlockPos"),
    ("connection.send", "connection.sendPacket"),
    ("difficulty.getSerializedName", "difficulty.asString"),
    ("entity.getDeltaMovement", "entity.getVelocity"),
    ("entity.getXRot", "entity.getPitch"),
    ("entity.getYRot", "entity.getYaw"),
    ("entity.pick", "entity.raycast"),
    ("entity.saveWithoutId", "entity.writeNbt"),
    ("hitResult.getDirection", "hitResult.getSide"),
    ("inventory.getContainerSize", "inventory.size"),
    ("inventory.getItem", "inventory.getStack"),
    ("inventory.pickSlot", "inventory.swapSlotWithHotbar"),
    ("inventory.selected", "inventory.selectedSlot"),
    ("itemStack.getTag", "itemStack.getNbt"),
    ("level.getChunkSource", "level.getChunkManager"),
    ("minecraft.gameDirectory", "minecraft.runDirectory"),
    ("minecraft.getConnection", "minecraft.getNetworkHandler"),
    ("minecraft.getCurrentServer", "minecraft.getCurrentServerEntry"),
    ("minecraft.getSingleplayerServer", "minecraft.getServer"),
    ("minecraft.getMainRenderTarget", "minecraft.getFramebuffer"),
    ("minecraft.gui.getChat", "minecraft.inGameHud.getChatHud"),
    ("minecraft.level", "minecraft.world"),
    ("minecraft.screen", "minecraft.currentScreen"),
    ("options.keyAttack", "options.attackKey"),
    ("options.keyDown", "options.backKey"),
    ("options.keyDrop", "options.dropKey"),
    ("options.keyJump", "options.jumpKey"),
    ("options.keyLeft", "options.leftKey"),
    ("options.keyPickItem", "options.pickItemKey"),
    ("options.keyRight", "options.rightKey"),
    ("options.keyShift", "options.sneakKey"),
    ("options.keySprint", "options.sprintKey"),
    ("options.keySwapOffhand", "options.swapHandsKey"),
    ("options.keyUp", "options.forwardKey"),
    ("options.keyUse", "options.useKey"),
    ("player.connection", "player.networkHandler"),
    ("networkHandler.sendChat", "networkHandler.sendChatMessage"),
    ("networkHandler.sendUnsignedCommand", "networkHandler.sendCommand"),
    ("player.getCommandSenderWorld", "player.getEntityWorld"),
    ("player.getHandSlots", "player.getHandItems"),
    ("player.getXRot", "player.getPitch"),
    ("player.getYRot", "player.getYaw"),
    ("player.setXRot", "player.setPitch"),
    ("player.setYRot", "player.setYaw"),
    ("player.moveTo", "player.refreshPositionAndAngles"),
    ("playerWorld.dimension", "playerWorld.getDimension"),
    ("screen.onClose", "screen.close"),
    ("server.getWorldData", "server.getSaveProperties"),
    ("serverData.ip", "serverData.address"),
    ("world.entitiesForRendering", "world.getEntities"),
    ("world.players", "world.getPlayers"),
    ("world.getLevelData", "world.getLevelProperties"),
    ("levelProperties.getGameTime", "levelProperties.getTime"),
    ("levelProperties.getDayTime", "levelProperties.getTimeOfDay"),
    ("levelProperties.getXSpawn", "levelProperties.getSpawnX"),
    ("levelProperties.getYSpawn", "levelProperties.getSpawnY"),
    ("levelProperties.getZSpawn", "levelProperties.getSpawnZ"),
];

/// An ordered list of name pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct NameTable {
    pub pairs: Vec<NamePair>,
}

impl NameTable {
    pub fn new(pairs: Vec<NamePair>) -> Self {
        NameTable { pairs }
    }

    pub fn from_static(pairs: &[(&str, &str)]) -> Self {
        NameTable {
            pairs: pairs
                .iter()
                .map(|(forge, fabric)| NamePair::new(*forge, *fabric))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NamePair> {
        self.pairs.iter()
    }

    /// Checks that the table is a bijection: no forge name and no fabric name
    /// appears twice, and no pair is empty on either side.
    pub fn validate(&self) -> Result<(), Error> {
        let mut forge_names = HashSet::new();
        let mut fabric_names = HashSet::new();
        for pair in &self.pairs {
            if pair.forge.is_empty() || pair.fabric.is_empty() {
                return Err(Error::validation_error(format!(
                    "empty name in pair `{}`",
                    pair
                )));
            }
            if !forge_names.insert(pair.forge.as_str()) {
                return Err(Error::validation_error(format!(
                    "duplicate forge name `{}`",
                    pair.forge
                )));
            }
            if !fabric_names.insert(pair.fabric.as_str()) {
                return Err(Error::validation_error(format!(
                    "duplicate fabric name `{}`",
                    pair.fabric
                )));
            }
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a NameTable {
    type Item = &'a NamePair;
    type IntoIter = std::slice::Iter<'a, NamePair>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.iter()
    }
}

/// The class table and member table that parametrize the rule compiler.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SymbolTables {
    pub classes: NameTable,
    pub members: NameTable,
}

impl SymbolTables {
    /// The catalogues compiled into the tool.
    pub fn builtin() -> Self {
        SymbolTables {
            classes: NameTable::from_static(CLASS_NAME_PAIRS),
            members: NameTable::from_static(MEMBER_NAME_PAIRS),
        }
    }

    pub fn with_classes(mut self, classes: NameTable) -> Self {
        self.classes = classes;
        self
    }

    pub fn with_members(mut self, members: NameTable) -> Self {
        self.members = members;
        self
    }

    pub fn validate(&self) -> Result<(), Error> {
        self.classes.validate()?;
        self.members.validate()
    }

    /// Writes both tables as a JSON object `{"classes": [...], "members": [...]}`.
    pub fn to_json_writer<W: std::io::Write>(&self, writer: W) -> Result<(), Error> {
        serde_json::to_writer_pretty(writer, self).map_err(Error::Parse)
    }
}

impl Default for SymbolTables {
    fn default() -> Self {
        SymbolTables::builtin()
    }
}
