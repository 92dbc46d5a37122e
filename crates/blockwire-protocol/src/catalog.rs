//! Lookup tables for block/item and entity identifiers.
//!
//! These mirror the identifiers the server-side mod validates against. The
//! server may know identifiers that are missing here (newer game versions);
//! block and item decoding copes with that through
//! [`MaterialType::Unknown`](crate::MaterialType::Unknown), entity decoding
//! does not.

wire_enum! {
    /// A block or item type.
    pub enum Material {
        Air => "AIR",
        Stone => "STONE",
        Granite => "GRANITE",
        PolishedGranite => "POLISHED_GRANITE",
        Diorite => "DIORITE",
        PolishedDiorite => "POLISHED_DIORITE",
        Andesite => "ANDESITE",
        PolishedAndesite => "POLISHED_ANDESITE",
        Deepslate => "DEEPSLATE",
        Cobblestone => "COBBLESTONE",
        MossyCobblestone => "MOSSY_COBBLESTONE",
        Bedrock => "BEDROCK",
        GrassBlock => "GRASS_BLOCK",
        Dirt => "DIRT",
        CoarseDirt => "COARSE_DIRT",
        Podzol => "PODZOL",
        Mycelium => "MYCELIUM",
        Sand => "SAND",
        RedSand => "RED_SAND",
        Gravel => "GRAVEL",
        Clay => "CLAY",
        SnowBlock => "SNOW_BLOCK",
        Ice => "ICE",
        PackedIce => "PACKED_ICE",
        BlueIce => "BLUE_ICE",
        OakLog => "OAK_LOG",
        SpruceLog => "SPRUCE_LOG",
        BirchLog => "BIRCH_LOG",
        JungleLog => "JUNGLE_LOG",
        AcaciaLog => "ACACIA_LOG",
        DarkOakLog => "DARK_OAK_LOG",
        CherryLog => "CHERRY_LOG",
        OakPlanks => "OAK_PLANKS",
        SprucePlanks => "SPRUCE_PLANKS",
        BirchPlanks => "BIRCH_PLANKS",
        JunglePlanks => "JUNGLE_PLANKS",
        AcaciaPlanks => "ACACIA_PLANKS",
        DarkOakPlanks => "DARK_OAK_PLANKS",
        OakLeaves => "OAK_LEAVES",
        BirchLeaves => "BIRCH_LEAVES",
        SpruceLeaves => "SPRUCE_LEAVES",
        CoalOre => "COAL_ORE",
        IronOre => "IRON_ORE",
        GoldOre => "GOLD_ORE",
        DiamondOre => "DIAMOND_ORE",
        EmeraldOre => "EMERALD_ORE",
        LapisOre => "LAPIS_ORE",
        RedstoneOre => "REDSTONE_ORE",
        CopperOre => "COPPER_ORE",
        CoalBlock => "COAL_BLOCK",
        IronBlock => "IRON_BLOCK",
        GoldBlock => "GOLD_BLOCK",
        DiamondBlock => "DIAMOND_BLOCK",
        EmeraldBlock => "EMERALD_BLOCK",
        LapisBlock => "LAPIS_BLOCK",
        RedstoneBlock => "REDSTONE_BLOCK",
        CopperBlock => "COPPER_BLOCK",
        NetheriteBlock => "NETHERITE_BLOCK",
        Glass => "GLASS",
        WhiteWool => "WHITE_WOOL",
        RedWool => "RED_WOOL",
        BlueWool => "BLUE_WOOL",
        GreenWool => "GREEN_WOOL",
        YellowWool => "YELLOW_WOOL",
        BlackWool => "BLACK_WOOL",
        Bricks => "BRICKS",
        StoneBricks => "STONE_BRICKS",
        Sandstone => "SANDSTONE",
        RedSandstone => "RED_SANDSTONE",
        Obsidian => "OBSIDIAN",
        Netherrack => "NETHERRACK",
        SoulSand => "SOUL_SAND",
        Glowstone => "GLOWSTONE",
        EndStone => "END_STONE",
        Prismarine => "PRISMARINE",
        QuartzBlock => "QUARTZ_BLOCK",
        Water => "WATER",
        Lava => "LAVA",
        Tnt => "TNT",
        Bookshelf => "BOOKSHELF",
        CraftingTable => "CRAFTING_TABLE",
        Furnace => "FURNACE",
        Chest => "CHEST",
        Barrel => "BARREL",
        Dispenser => "DISPENSER",
        Dropper => "DROPPER",
        Hopper => "HOPPER",
        Target => "TARGET",
        Beacon => "BEACON",
        StonePressurePlate => "STONE_PRESSURE_PLATE",
        OakPressurePlate => "OAK_PRESSURE_PLATE",
        Lever => "LEVER",
        StoneButton => "STONE_BUTTON",
        OakDoor => "OAK_DOOR",
        IronDoor => "IRON_DOOR",
        Ladder => "LADDER",
        Torch => "TORCH",
        Lantern => "LANTERN",
        Melon => "MELON",
        Pumpkin => "PUMPKIN",
        CarvedPumpkin => "CARVED_PUMPKIN",
        JackOLantern => "JACK_O_LANTERN",
        HayBlock => "HAY_BLOCK",
        Cactus => "CACTUS",
        SugarCane => "SUGAR_CANE",
        Bamboo => "BAMBOO",
        Dandelion => "DANDELION",
        Poppy => "POPPY",
        LilyOfTheValley => "LILY_OF_THE_VALLEY",
        Cornflower => "CORNFLOWER",
        OxeyeDaisy => "OXEYE_DAISY",
        Sunflower => "SUNFLOWER",
        WoodenSword => "WOODEN_SWORD",
        StoneSword => "STONE_SWORD",
        IronSword => "IRON_SWORD",
        GoldenSword => "GOLDEN_SWORD",
        DiamondSword => "DIAMOND_SWORD",
        NetheriteSword => "NETHERITE_SWORD",
        WoodenPickaxe => "WOODEN_PICKAXE",
        StonePickaxe => "STONE_PICKAXE",
        IronPickaxe => "IRON_PICKAXE",
        GoldenPickaxe => "GOLDEN_PICKAXE",
        DiamondPickaxe => "DIAMOND_PICKAXE",
        NetheritePickaxe => "NETHERITE_PICKAXE",
        WoodenAxe => "WOODEN_AXE",
        IronAxe => "IRON_AXE",
        DiamondAxe => "DIAMOND_AXE",
        WoodenShovel => "WOODEN_SHOVEL",
        IronShovel => "IRON_SHOVEL",
        DiamondShovel => "DIAMOND_SHOVEL",
        Bow => "BOW",
        Crossbow => "CROSSBOW",
        Arrow => "ARROW",
        Shield => "SHIELD",
        Trident => "TRIDENT",
        FishingRod => "FISHING_ROD",
        Shears => "SHEARS",
        FlintAndSteel => "FLINT_AND_STEEL",
        IronHelmet => "IRON_HELMET",
        IronChestplate => "IRON_CHESTPLATE",
        IronLeggings => "IRON_LEGGINGS",
        IronBoots => "IRON_BOOTS",
        DiamondHelmet => "DIAMOND_HELMET",
        DiamondChestplate => "DIAMOND_CHESTPLATE",
        DiamondLeggings => "DIAMOND_LEGGINGS",
        DiamondBoots => "DIAMOND_BOOTS",
        Elytra => "ELYTRA",
        Apple => "APPLE",
        GoldenApple => "GOLDEN_APPLE",
        Bread => "BREAD",
        CookedBeef => "COOKED_BEEF",
        CookedChicken => "COOKED_CHICKEN",
        Carrot => "CARROT",
        Potato => "POTATO",
        BakedPotato => "BAKED_POTATO",
        MelonSlice => "MELON_SLICE",
        Cake => "CAKE",
        Stick => "STICK",
        Coal => "COAL",
        IronIngot => "IRON_INGOT",
        GoldIngot => "GOLD_INGOT",
        Diamond => "DIAMOND",
        Emerald => "EMERALD",
        Redstone => "REDSTONE",
        LapisLazuli => "LAPIS_LAZULI",
        NetheriteIngot => "NETHERITE_INGOT",
        EnderPearl => "ENDER_PEARL",
        BlazeRod => "BLAZE_ROD",
        SlimeBall => "SLIME_BALL",
        Bone => "BONE",
        String => "STRING",
        Feather => "FEATHER",
        Gunpowder => "GUNPOWDER",
        Leather => "LEATHER",
        Paper => "PAPER",
        Book => "BOOK",
        Compass => "COMPASS",
        Clock => "CLOCK",
        Map => "MAP",
        WaterBucket => "WATER_BUCKET",
        LavaBucket => "LAVA_BUCKET",
        Bucket => "BUCKET",
        Snowball => "SNOWBALL",
        Egg => "EGG",
        TotemOfUndying => "TOTEM_OF_UNDYING",
    }
}

wire_enum! {
    /// A type of entity that can be spawned.
    pub enum EntityKind {
        Allay => "ALLAY",
        ArmorStand => "ARMOR_STAND",
        Axolotl => "AXOLOTL",
        Bat => "BAT",
        Bee => "BEE",
        Blaze => "BLAZE",
        Camel => "CAMEL",
        Cat => "CAT",
        CaveSpider => "CAVE_SPIDER",
        Chicken => "CHICKEN",
        Cod => "COD",
        Cow => "COW",
        Creeper => "CREEPER",
        Dolphin => "DOLPHIN",
        Donkey => "DONKEY",
        Drowned => "DROWNED",
        ElderGuardian => "ELDER_GUARDIAN",
        EnderDragon => "ENDER_DRAGON",
        Enderman => "ENDERMAN",
        Endermite => "ENDERMITE",
        Evoker => "EVOKER",
        Fox => "FOX",
        Frog => "FROG",
        Ghast => "GHAST",
        Giant => "GIANT",
        GlowSquid => "GLOW_SQUID",
        Goat => "GOAT",
        Guardian => "GUARDIAN",
        Hoglin => "HOGLIN",
        Horse => "HORSE",
        Husk => "HUSK",
        IronGolem => "IRON_GOLEM",
        Llama => "LLAMA",
        MagmaCube => "MAGMA_CUBE",
        Mule => "MULE",
        MushroomCow => "MUSHROOM_COW",
        Ocelot => "OCELOT",
        Panda => "PANDA",
        Parrot => "PARROT",
        Phantom => "PHANTOM",
        Pig => "PIG",
        Piglin => "PIGLIN",
        Pillager => "PILLAGER",
        PolarBear => "POLAR_BEAR",
        Pufferfish => "PUFFERFISH",
        Rabbit => "RABBIT",
        Ravager => "RAVAGER",
        Salmon => "SALMON",
        Sheep => "SHEEP",
        Shulker => "SHULKER",
        Silverfish => "SILVERFISH",
        Skeleton => "SKELETON",
        SkeletonHorse => "SKELETON_HORSE",
        Slime => "SLIME",
        Sniffer => "SNIFFER",
        Snowman => "SNOWMAN",
        Spider => "SPIDER",
        Squid => "SQUID",
        Stray => "STRAY",
        Strider => "STRIDER",
        Tadpole => "TADPOLE",
        TropicalFish => "TROPICAL_FISH",
        Turtle => "TURTLE",
        Vex => "VEX",
        Villager => "VILLAGER",
        Vindicator => "VINDICATOR",
        WanderingTrader => "WANDERING_TRADER",
        Warden => "WARDEN",
        Witch => "WITCH",
        Wither => "WITHER",
        WitherSkeleton => "WITHER_SKELETON",
        Wolf => "WOLF",
        Zoglin => "ZOGLIN",
        Zombie => "ZOMBIE",
        ZombieHorse => "ZOMBIE_HORSE",
        ZombieVillager => "ZOMBIE_VILLAGER",
        ZombifiedPiglin => "ZOMBIFIED_PIGLIN",
        Boat => "BOAT",
        Minecart => "MINECART",
        PrimedTnt => "PRIMED_TNT",
        Lightning => "LIGHTNING",
        Firework => "FIREWORK",
        ExperienceOrb => "EXPERIENCE_ORB",
    }
}
